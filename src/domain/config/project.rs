//! Project configuration model (`djboot.toml`).

use serde::Deserialize;

use super::ConfigError;
use crate::domain::identifiers::ModuleName;
use crate::domain::identifiers::validation::validate_safe_path_component;
use crate::domain::project::TemplateKind;
use crate::domain::settings::SettingsPatch;

/// Explicit configuration passed into every setup operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project directory name, created under the working directory.
    pub name: String,
    /// Backend module generated by `startproject` (holds `settings.py`).
    pub backend_module: ModuleName,
    /// Hosts written to `ALLOWED_HOSTS`.
    pub allowed_hosts: Vec<String>,
    pub template_dir: String,
    pub static_dir: String,
    /// Local directory holding template and stylesheet sources.
    pub files_dir: String,
    /// Stylesheet copied from `files_dir` into `static_dir`.
    pub stylesheet: String,
    /// Interpreter used to create the virtual environment.
    pub python: String,
    pub framework_package: String,
    pub apps: Vec<AppSpec>,
    pub templates: Vec<TemplateKind>,
    /// Run `manage.py migrate` as the last step.
    pub migrate: bool,
    /// Extra settings rules (`[[patch.rules]]`), applied after the generated ones.
    pub patch: SettingsPatch,
}

/// A sub-application generated with `startapp`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSpec {
    pub name: ModuleName,
    /// Model class rendered into the app's `models.py`; derived from the
    /// app name when absent (`posts` → `Post`).
    #[serde(default)]
    pub model: Option<String>,
}

impl AppSpec {
    pub fn named(name: ModuleName) -> Self {
        Self { name, model: None }
    }

    pub fn model_name(&self) -> String {
        self.model.clone().unwrap_or_else(|| model_name_for(self.name.as_str()))
    }
}

fn model_name_for(app: &str) -> String {
    let singular = app.strip_suffix('s').filter(|s| !s.is_empty()).unwrap_or(app);
    singular
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "my_project".to_string(),
            backend_module: ModuleName::from_static("core"),
            allowed_hosts: vec!["127.0.0.1".to_string()],
            template_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            files_dir: "files".to_string(),
            stylesheet: "style.css".to_string(),
            python: "python3".to_string(),
            framework_package: "django".to_string(),
            apps: Vec::new(),
            templates: vec![TemplateKind::Layout, TemplateKind::Home, TemplateKind::About],
            migrate: false,
            patch: SettingsPatch::default(),
        }
    }
}

impl ProjectConfig {
    /// Validate cross-field constraints not expressible in the schema.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("name", &self.name),
            ("template_dir", &self.template_dir),
            ("static_dir", &self.static_dir),
            ("files_dir", &self.files_dir),
            ("stylesheet", &self.stylesheet),
        ] {
            if !validate_safe_path_component(value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a single directory or file name, got '{}'",
                    field, value
                )));
            }
        }

        if self.python.trim().is_empty() {
            return Err(ConfigError::Invalid("python must not be empty".into()));
        }
        if self.framework_package.trim().is_empty() {
            return Err(ConfigError::Invalid("framework_package must not be empty".into()));
        }

        let mut seen = std::collections::BTreeSet::new();
        for app in &self.apps {
            if app.name == self.backend_module {
                return Err(ConfigError::Invalid(format!(
                    "app '{}' collides with the backend module",
                    app.name
                )));
            }
            if !seen.insert(app.name.as_str()) {
                return Err(ConfigError::Invalid(format!("app '{}' listed twice", app.name)));
            }
            let model = app.model_name();
            if !is_class_name(&model) {
                return Err(ConfigError::Invalid(format!(
                    "model '{}' for app '{}' must be a Python class name",
                    model, app.name
                )));
            }
        }

        Ok(())
    }

    /// Add `app` unless an app with the same name is configured.
    pub fn add_app(&mut self, app: AppSpec) {
        if !self.apps.iter().any(|existing| existing.name == app.name) {
            self.apps.push(app);
        }
    }
}

fn is_class_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
