//! Ordered patch plans over a settings document.

use serde::{Deserialize, Serialize};

use super::document::SettingsDocument;
use super::rules::{self, RuleOutcome};
use crate::domain::config::ProjectConfig;

/// One line-level rewrite of a settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PatchRule {
    EnsureImport { module: String },
    SetAllowedHosts { hosts: Vec<String> },
    SetTemplateDirs { dirs: Vec<String> },
    EnsureStaticDirs { dir: String },
    AppendInstalledModule { module: String },
    EnsureInstalledModule { module: String },
}

impl PatchRule {
    /// Short name used in reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            PatchRule::EnsureImport { .. } => "ensure_import",
            PatchRule::SetAllowedHosts { .. } => "set_allowed_hosts",
            PatchRule::SetTemplateDirs { .. } => "set_template_dirs",
            PatchRule::EnsureStaticDirs { .. } => "ensure_static_dirs",
            PatchRule::AppendInstalledModule { .. } => "append_installed_module",
            PatchRule::EnsureInstalledModule { .. } => "ensure_installed_module",
        }
    }

    pub fn apply(&self, doc: &mut SettingsDocument) -> RuleOutcome {
        match self {
            PatchRule::EnsureImport { module } => rules::ensure_import(doc, module),
            PatchRule::SetAllowedHosts { hosts } => rules::set_allowed_hosts(doc, hosts),
            PatchRule::SetTemplateDirs { dirs } => rules::set_template_dirs(doc, dirs),
            PatchRule::EnsureStaticDirs { dir } => rules::ensure_static_dirs(doc, dir),
            PatchRule::AppendInstalledModule { module } => {
                rules::append_installed_module(doc, module)
            }
            PatchRule::EnsureInstalledModule { module } => {
                rules::ensure_installed_module(doc, module)
            }
        }
    }
}

/// An ordered list of rules applied to one document before a single write.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsPatch {
    pub rules: Vec<PatchRule>,
}

impl SettingsPatch {
    pub fn new(rules: Vec<PatchRule>) -> Self {
        Self { rules }
    }

    /// The canonical plan for a generated project, followed by the rules
    /// configured under `[patch]`.
    ///
    /// `import os` comes first because the static-dirs block calls
    /// `os.path.join`.
    pub fn for_project(config: &ProjectConfig) -> Self {
        let mut rules = vec![
            PatchRule::EnsureImport { module: "os".into() },
            PatchRule::SetAllowedHosts { hosts: config.allowed_hosts.clone() },
            PatchRule::SetTemplateDirs { dirs: vec![config.template_dir.clone()] },
            PatchRule::EnsureStaticDirs { dir: config.static_dir.clone() },
        ];
        rules.extend(
            config
                .apps
                .iter()
                .map(|app| PatchRule::EnsureInstalledModule { module: app.name.to_string() }),
        );
        rules.extend(config.patch.rules.iter().cloned());
        Self { rules }
    }

    /// Apply every rule in order, returning one entry per rule.
    pub fn apply(&self, doc: &mut SettingsDocument) -> PatchReport {
        let entries = self
            .rules
            .iter()
            .map(|rule| {
                let outcome = rule.apply(doc);
                tracing::debug!(rule = rule.name(), ?outcome, "applied settings rule");
                PatchEntry { rule: rule.name().to_string(), outcome }
            })
            .collect();
        PatchReport { entries }
    }
}

/// Outcome of one rule within a [`PatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchEntry {
    pub rule: String,
    #[serde(flatten)]
    pub outcome: RuleOutcome,
}

/// Per-rule outcomes of a [`SettingsPatch`] application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PatchReport {
    pub entries: Vec<PatchEntry>,
}

impl PatchReport {
    pub fn changed(&self) -> bool {
        self.entries.iter().any(|entry| entry.outcome.is_applied())
    }

    /// Entries whose marker was not found.
    pub fn missing_markers(&self) -> impl Iterator<Item = &PatchEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, RuleOutcome::MarkerMissing { .. }))
    }
}
