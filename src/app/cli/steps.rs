use crate::app::api::{self, ConfigSource};
use crate::domain::AppError;

pub fn run_steps(source: ConfigSource) -> Result<(), AppError> {
    let planned = api::plan_steps(&source)?;
    for (i, entry) in planned.iter().enumerate() {
        if entry.detail.is_empty() {
            println!("  {}. {}", i + 1, entry.step);
        } else {
            println!("  {}. {} ({})", i + 1, entry.step, entry.detail);
        }
    }
    Ok(())
}
