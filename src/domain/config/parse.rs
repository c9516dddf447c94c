//! Pure parse/validate for project configuration (`djboot.toml`).

use crate::domain::AppError;

use super::ProjectConfig;

/// Parse and validate project configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
