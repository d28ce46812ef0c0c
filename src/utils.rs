use std::fs::create_dir_all;

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

/// Resolves the per-user project folder, creating its config directory on
/// first use. The log file lives there unless local logging is requested.
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}
