//! Apply a settings patch plan to a file in one write.

use std::path::Path;

use crate::domain::{AppError, PatchReport, RuleOutcome, SettingsDocument, SettingsPatch};
use crate::ports::ProjectFilesystem;

/// Read `path`, apply `plan`, and write the result back once.
///
/// Rules whose marker is absent are logged and reported. With `strict`
/// the first one aborts the run before anything is written.
pub fn patch_settings<F: ProjectFilesystem>(
    fs: &F,
    path: &Path,
    plan: &SettingsPatch,
    strict: bool,
) -> Result<PatchReport, AppError> {
    if !fs.file_exists(path) {
        return Err(AppError::SettingsNotFound(path.display().to_string()));
    }

    let content = fs.read_file(path)?;
    let mut doc = SettingsDocument::parse(&content);
    let report = plan.apply(&mut doc);

    for entry in report.missing_markers() {
        let RuleOutcome::MarkerMissing { marker } = &entry.outcome else { continue };
        if strict {
            return Err(AppError::MarkerMissing {
                rule: entry.rule.clone(),
                marker: marker.clone(),
            });
        }
        tracing::warn!(
            rule = %entry.rule,
            %marker,
            path = %path.display(),
            "marker not found, rule skipped"
        );
    }

    if report.changed() {
        fs.write_file(path, &doc.render())?;
        tracing::info!(path = %path.display(), "settings patched");
    } else {
        tracing::debug!(path = %path.display(), "settings already up to date");
    }

    Ok(report)
}
