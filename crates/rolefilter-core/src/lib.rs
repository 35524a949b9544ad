pub mod directory;
pub mod error;
pub mod function;
pub mod resolver;
pub mod table;
pub mod token;

pub use error::{FilterError, Result};
pub use resolver::RoleFilterResolver;
pub use table::RoleStepTable;
pub use token::FilterToken;
