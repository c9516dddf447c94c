mod error;
pub mod parse;
pub mod paths;
mod project;

pub use error::ConfigError;
pub use parse::parse_config_content;
pub use project::{AppSpec, ProjectConfig};
