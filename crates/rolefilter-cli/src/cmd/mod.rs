pub mod resolve;
pub mod roles;
pub mod table;

use anyhow::Context;
use rolefilter_core::directory::ProjectDirectory;
use std::path::Path;

pub fn load_directory(path: Option<&Path>) -> anyhow::Result<ProjectDirectory> {
    let path = path.context(
        "no project directory given: pass --directory or set ROLEFILTER_DIRECTORY",
    )?;
    ProjectDirectory::load(path)
        .with_context(|| format!("failed to load project directory {}", path.display()))
}
