use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    MissingArgument { expected: usize, got: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
