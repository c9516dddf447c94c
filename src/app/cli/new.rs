//! New command implementation.

use crate::app::api::{self, ConfigSource, NewOptions};
use crate::domain::{AppError, StepOutcome};

pub fn run_new(source: ConfigSource, strict: bool) -> Result<(), AppError> {
    let outcome = api::new_project(&source, NewOptions { strict })?;

    for report in &outcome.steps {
        match &report.outcome {
            StepOutcome::Completed { warnings } => {
                println!("✅ {}", report.step);
                for warning in warnings {
                    println!("⚠️  {}", warning);
                }
            }
            StepOutcome::Skipped { reason } => {
                println!("  • {} skipped: {}", report.step, reason);
            }
        }
    }
    println!("✅ Project ready at {}", outcome.root.display());
    Ok(())
}
