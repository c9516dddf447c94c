//! Project configuration loading from the working directory.

use std::path::Path;

use crate::domain::config::{self, ConfigError};
use crate::domain::{AppError, ProjectConfig};
use crate::ports::ProjectFilesystem;

/// Load `path` through `fs`, falling back to defaults when it is absent.
///
/// With `required` set, an absent file is `ConfigError::Missing` instead.
pub fn load_config<F: ProjectFilesystem>(
    fs: &F,
    path: &Path,
    required: bool,
) -> Result<ProjectConfig, AppError> {
    if !fs.file_exists(path) {
        if required {
            return Err(ConfigError::Missing(fs.resolve_path(path).display().to_string()).into());
        }
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(ProjectConfig::default());
    }

    tracing::debug!(path = %path.display(), "loading configuration");
    let content = fs.read_file(path)?;
    config::parse_config_content(&content)
}
