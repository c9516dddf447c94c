//! Settings patcher: line-oriented rewrites of a generated `settings.py`.

mod document;
mod patch;
pub mod rules;

pub use document::SettingsDocument;
pub use patch::{PatchEntry, PatchReport, PatchRule, SettingsPatch};
pub use rules::RuleOutcome;
