//! Setup pipeline steps and their outcomes.

use std::fmt;

use serde::Serialize;

use crate::domain::config::ProjectConfig;

/// One idempotent step of a project setup run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupStep {
    CreateDirectories,
    CreateVirtualEnv,
    InstallFramework,
    StartProject,
    StartApps,
    WriteTemplates,
    WriteStatic,
    WriteModules,
    PatchSettings,
    WriteGitignore,
    Migrate,
}

impl SetupStep {
    const ORDER: [SetupStep; 11] = [
        SetupStep::CreateDirectories,
        SetupStep::CreateVirtualEnv,
        SetupStep::InstallFramework,
        SetupStep::StartProject,
        SetupStep::StartApps,
        SetupStep::WriteTemplates,
        SetupStep::WriteStatic,
        SetupStep::WriteModules,
        SetupStep::PatchSettings,
        SetupStep::WriteGitignore,
        SetupStep::Migrate,
    ];

    /// Steps that run for `config`, in order.
    pub fn plan(config: &ProjectConfig) -> Vec<SetupStep> {
        Self::ORDER
            .into_iter()
            .filter(|step| match step {
                SetupStep::StartApps => !config.apps.is_empty(),
                SetupStep::Migrate => config.migrate,
                _ => true,
            })
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            SetupStep::CreateDirectories => "create directories",
            SetupStep::CreateVirtualEnv => "create virtual environment",
            SetupStep::InstallFramework => "install framework",
            SetupStep::StartProject => "start project",
            SetupStep::StartApps => "start apps",
            SetupStep::WriteTemplates => "write templates",
            SetupStep::WriteStatic => "write static assets",
            SetupStep::WriteModules => "write views and urls",
            SetupStep::PatchSettings => "patch settings",
            SetupStep::WriteGitignore => "write .gitignore",
            SetupStep::Migrate => "run migrations",
        }
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of running one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Completed { warnings: Vec<String> },
    Skipped { reason: String },
}

impl StepOutcome {
    pub fn completed() -> Self {
        StepOutcome::Completed { warnings: Vec::new() }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        StepOutcome::Skipped { reason: reason.into() }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            StepOutcome::Completed { warnings } => warnings,
            StepOutcome::Skipped { .. } => &[],
        }
    }
}

/// A step paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: SetupStep,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}
