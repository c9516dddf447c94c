//! `steps` command: describe what `new` would do without doing it.

use serde::Serialize;

use crate::domain::{ProjectConfig, ProjectLayout, SettingsPatch, SetupStep};

/// One planned step with a short description of its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub step: SetupStep,
    pub detail: String,
}

pub fn list(config: &ProjectConfig) -> Vec<PlannedStep> {
    let layout = ProjectLayout::new(config);
    SetupStep::plan(config)
        .into_iter()
        .map(|step| PlannedStep { step, detail: describe(step, config, &layout) })
        .collect()
}

fn describe(step: SetupStep, config: &ProjectConfig, layout: &ProjectLayout) -> String {
    match step {
        SetupStep::CreateDirectories => layout.root().display().to_string(),
        SetupStep::CreateVirtualEnv => {
            format!("{} -m venv {}", config.python, layout.venv_dir().display())
        }
        SetupStep::InstallFramework => format!("pip install {}", config.framework_package),
        SetupStep::StartProject => format!("startproject {}", config.backend_module),
        SetupStep::StartApps => {
            config.apps.iter().map(|app| app.name.as_str()).collect::<Vec<_>>().join(", ")
        }
        SetupStep::WriteTemplates => {
            config.templates.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ")
        }
        SetupStep::WriteStatic => layout.stylesheet_target().display().to_string(),
        SetupStep::WriteModules => {
            let apps = config.apps.len();
            format!("{} and {} app(s)", config.backend_module, apps)
        }
        SetupStep::PatchSettings => {
            let rules = SettingsPatch::for_project(config).rules.len();
            format!("{} ({} rules)", layout.settings_file().display(), rules)
        }
        SetupStep::WriteGitignore => layout.gitignore().display().to_string(),
        SetupStep::Migrate => "manage.py migrate".to_string(),
    }
}
