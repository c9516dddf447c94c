//! Setup pipeline domain: ordered, idempotent steps.

mod step;

pub use step::{SetupStep, StepOutcome, StepReport};
