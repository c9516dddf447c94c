use std::io;

use thiserror::Error;

use crate::domain::config::ConfigError;

/// Library-wide error type for djboot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Project configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Identifier is not usable as a Python module name.
    #[error("Invalid module name '{0}': must be a Python identifier (letters, digits, underscores)")]
    InvalidModuleName(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Settings file to patch does not exist.
    #[error("Settings file not found: {0}")]
    SettingsNotFound(String),

    /// A patch rule found no line to act on (strict mode only).
    #[error("Marker '{marker}' not found while applying '{rule}'")]
    MarkerMissing { rule: String, marker: String },

    /// Template source file is missing from the files/ tree.
    #[error("Template '{name}' not found at {path}")]
    TemplateSourceMissing { name: String, path: String },

    /// Embedded scaffold asset is missing or failed to render.
    #[error("Failed to render scaffold asset '{asset}': {reason}")]
    AssetRender { asset: String, reason: String },

    /// External command exited unsuccessfully or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },
}

impl AppError {
    pub fn command_failed(command: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::CommandFailed { command: command.into(), details: details.into() }
    }

    /// Returns the I/O error kind if this is an I/O error.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            AppError::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}
