//! djboot: bootstrap a Django project skeleton and patch its generated settings.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigSource, NewOptions, NewOutcome, PlannedStep, load_project_config, new_project,
    new_project_at, new_project_with_runner, patch_settings_file, patch_settings_file_at,
    plan_steps, plan_steps_at,
};
pub use app::config::ConfigOverrides;
pub use domain::{
    AppError, PatchReport, PatchRule, ProjectConfig, RuleOutcome, SettingsDocument, SettingsPatch,
    SetupStep, StepOutcome, StepReport,
};
pub use ports::ProcessRunner;
