//! `new` command: run the setup pipeline for one project.

mod steps;

use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig, ProjectLayout, SetupStep, StepOutcome, StepReport};
use crate::ports::{ProcessRunner, ProjectFilesystem, TemplateSource};

/// Options for the `new` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewOptions {
    /// Fail instead of warning when a settings marker is missing.
    pub strict: bool,
}

/// Execute every planned step in order.
///
/// The first failing step aborts the run; steps already completed are
/// left in place. Re-running skips work that is already done.
pub fn execute<F, P, T>(
    ctx: &AppContext<F, P, T>,
    config: &ProjectConfig,
    options: NewOptions,
) -> Result<Vec<StepReport>, AppError>
where
    F: ProjectFilesystem,
    P: ProcessRunner,
    T: TemplateSource,
{
    let layout = ProjectLayout::new(config);
    let runner = steps::StepRunner { ctx, config, layout: &layout, options };

    let mut reports = Vec::new();
    for step in SetupStep::plan(config) {
        tracing::debug!(%step, "running step");
        let outcome = runner.run(step)?;
        match &outcome {
            StepOutcome::Completed { .. } => tracing::info!(%step, "step completed"),
            StepOutcome::Skipped { reason } => tracing::info!(%step, %reason, "step skipped"),
        }
        reports.push(StepReport { step, outcome });
    }
    Ok(reports)
}
