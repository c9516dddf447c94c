//! Patch command implementation.

use std::path::Path;

use super::OutputFormat;
use crate::app::api::{self, ConfigSource};
use crate::domain::{AppError, PatchReport, RuleOutcome};

pub fn run_patch(
    settings: &Path,
    source: ConfigSource,
    strict: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let report = api::patch_settings_file(settings, &source, strict)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| AppError::ParseError {
                what: "patch report".into(),
                details: e.to_string(),
            })?;
            println!("{}", json);
        }
        OutputFormat::Text => print_report(settings, &report),
    }
    Ok(())
}

fn print_report(settings: &Path, report: &PatchReport) {
    if report.changed() {
        println!("✅ Patched {}", settings.display());
    } else {
        println!("✅ {} already up to date", settings.display());
    }

    for entry in &report.entries {
        match &entry.outcome {
            RuleOutcome::Applied { lines } => println!("  • {}: {} line(s)", entry.rule, lines),
            RuleOutcome::Unchanged => println!("  • {}: unchanged", entry.rule),
            RuleOutcome::MarkerMissing { marker } => {
                println!("⚠️  {}: marker '{}' not found", entry.rule, marker)
            }
        }
    }
}
