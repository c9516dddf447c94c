//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{CommandProcessRunner, FilesDirTemplateSource, FilesystemStore};
use crate::app::AppContext;
use crate::app::commands::{new, patch, steps};
use crate::app::config::{self, ConfigOverrides};
use crate::domain::config::paths::CONFIG_FILENAME;
use crate::domain::{ProjectLayout, SettingsPatch};
use crate::ports::{ProcessRunner, ProjectFilesystem};

pub use crate::app::commands::new::NewOptions;
pub use crate::app::commands::steps::PlannedStep;
pub use crate::domain::{AppError, PatchReport, ProjectConfig, StepReport};

/// Where configuration comes from and what overrides it.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    /// Explicit file; must exist when given. Defaults to `./djboot.toml`.
    pub path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Result of a `new` run.
#[derive(Debug, Clone)]
pub struct NewOutcome {
    pub root: PathBuf,
    pub steps: Vec<StepReport>,
}

/// Resolve the effective configuration for a run rooted at `root`.
pub fn load_project_config(root: &Path, source: &ConfigSource) -> Result<ProjectConfig, AppError> {
    let mut config = match &source.path {
        Some(path) => {
            let path = root.join(path);
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
            let file = path.file_name().map(PathBuf::from).unwrap_or_default();
            config::load_config(&FilesystemStore::new(dir), &file, true)?
        }
        None => {
            let store = FilesystemStore::new(root.to_path_buf());
            config::load_config(&store, Path::new(CONFIG_FILENAME), false)?
        }
    };
    source.overrides.apply(&mut config)?;
    Ok(config)
}

/// Create a project in the current directory.
pub fn new_project(source: &ConfigSource, options: NewOptions) -> Result<NewOutcome, AppError> {
    new_project_at(std::env::current_dir()?, source, options)
}

/// Create a project under `root`, spawning the real Python tooling.
pub fn new_project_at(
    root: impl Into<PathBuf>,
    source: &ConfigSource,
    options: NewOptions,
) -> Result<NewOutcome, AppError> {
    new_project_with_runner(root, source, options, CommandProcessRunner::new())
}

/// Create a project under `root` with a caller-supplied process runner.
pub fn new_project_with_runner<P: ProcessRunner>(
    root: impl Into<PathBuf>,
    source: &ConfigSource,
    options: NewOptions,
    runner: P,
) -> Result<NewOutcome, AppError> {
    let root = root.into();
    let config = load_project_config(&root, source)?;

    let store = FilesystemStore::new(root);
    let layout = ProjectLayout::new(&config);
    let templates = FilesDirTemplateSource::new(store.resolve_path(layout.files_dir()));
    let project_root = store.resolve_path(layout.root());
    let ctx = AppContext::new(store, runner, templates);

    let steps = new::execute(&ctx, &config, options)?;
    Ok(NewOutcome { root: project_root, steps })
}

/// Patch an existing settings file with the plan for the configured project.
pub fn patch_settings_file(
    settings: &Path,
    source: &ConfigSource,
    strict: bool,
) -> Result<PatchReport, AppError> {
    patch_settings_file_at(std::env::current_dir()?, settings, source, strict)
}

/// Like [`patch_settings_file`], resolving relative paths against `root`.
pub fn patch_settings_file_at(
    root: impl Into<PathBuf>,
    settings: &Path,
    source: &ConfigSource,
    strict: bool,
) -> Result<PatchReport, AppError> {
    let root = root.into();
    let config = load_project_config(&root, source)?;

    // The settings file may live anywhere; scope the store to its directory.
    let settings = root.join(settings);
    let dir = settings.parent().map(Path::to_path_buf).unwrap_or(root);
    let file = settings.file_name().map(PathBuf::from).unwrap_or_default();
    let store = FilesystemStore::new(dir);

    let report = patch::patch_settings(&store, &file, &SettingsPatch::for_project(&config), strict);
    report.map_err(|err| match err {
        AppError::SettingsNotFound(_) => AppError::SettingsNotFound(settings.display().to_string()),
        other => other,
    })
}

/// Steps `new` would run in the current directory.
pub fn plan_steps(source: &ConfigSource) -> Result<Vec<PlannedStep>, AppError> {
    plan_steps_at(std::env::current_dir()?, source)
}

/// Steps `new` would run under `root`.
pub fn plan_steps_at(
    root: impl AsRef<Path>,
    source: &ConfigSource,
) -> Result<Vec<PlannedStep>, AppError> {
    let config = load_project_config(root.as_ref(), source)?;
    Ok(steps::list(&config))
}
