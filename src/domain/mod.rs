pub mod config;
pub mod error;
pub mod identifiers;
pub mod project;
pub mod settings;
pub mod setup;

pub use config::{AppSpec, ConfigError, ProjectConfig};
pub use error::AppError;
pub use identifiers::ModuleName;
pub use project::{ProjectLayout, TemplateKind};
pub use settings::{PatchReport, PatchRule, RuleOutcome, SettingsDocument, SettingsPatch};
pub use setup::{SetupStep, StepOutcome, StepReport};
