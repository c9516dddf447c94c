use crate::domain::{AppError, AppSpec, ModuleName, ProjectConfig};

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    /// Apps added to the configured list.
    pub apps: Vec<String>,
    /// Replaces `allowed_hosts` when non-empty.
    pub hosts: Vec<String>,
    pub migrate: bool,
}

impl ConfigOverrides {
    /// Layer the overrides onto `config` and re-validate the result.
    pub fn apply(&self, config: &mut ProjectConfig) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        for app in &self.apps {
            config.add_app(AppSpec::named(ModuleName::new(app)?));
        }
        if !self.hosts.is_empty() {
            config.allowed_hosts = self.hosts.clone();
        }
        if self.migrate {
            config.migrate = true;
        }
        config.validate()?;
        Ok(())
    }
}
