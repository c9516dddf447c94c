use std::path::{Path, PathBuf};

use crate::adapters::assets::{self, GeneratedFile};
use crate::app::AppContext;
use crate::app::commands::patch::patch_settings;
use crate::domain::project::GITIGNORE_CONTENT;
use crate::domain::{
    AppError, ProjectConfig, ProjectLayout, RuleOutcome, SettingsPatch, SetupStep, StepOutcome,
};
use crate::ports::{ProcessRunner, ProjectFilesystem, TemplateSource};

use super::NewOptions;

pub(super) struct StepRunner<'a, F, P, T>
where
    F: ProjectFilesystem,
    P: ProcessRunner,
    T: TemplateSource,
{
    pub ctx: &'a AppContext<F, P, T>,
    pub config: &'a ProjectConfig,
    pub layout: &'a ProjectLayout,
    pub options: NewOptions,
}

impl<F, P, T> StepRunner<'_, F, P, T>
where
    F: ProjectFilesystem,
    P: ProcessRunner,
    T: TemplateSource,
{
    pub fn run(&self, step: SetupStep) -> Result<StepOutcome, AppError> {
        match step {
            SetupStep::CreateDirectories => self.create_directories(),
            SetupStep::CreateVirtualEnv => self.create_virtual_env(),
            SetupStep::InstallFramework => self.install_framework(),
            SetupStep::StartProject => self.start_project(),
            SetupStep::StartApps => self.start_apps(),
            SetupStep::WriteTemplates => self.write_templates(),
            SetupStep::WriteStatic => self.write_static(),
            SetupStep::WriteModules => self.write_modules(),
            SetupStep::PatchSettings => self.patch_settings(),
            SetupStep::WriteGitignore => self.write_gitignore(),
            SetupStep::Migrate => self.migrate(),
        }
    }

    fn fs(&self) -> &F {
        self.ctx.filesystem()
    }

    fn exists(&self, path: &Path) -> bool {
        self.fs().file_exists(path)
    }

    /// Absolute form of a layout path, as handed to external programs.
    fn absolute(&self, path: &Path) -> PathBuf {
        self.fs().resolve_path(path)
    }

    fn spawn(&self, program: PathBuf, args: &[&str]) -> Result<(), AppError> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        self.ctx.processes().run(&program, &args, &self.absolute(self.layout.root()))
    }

    fn create_directories(&self) -> Result<StepOutcome, AppError> {
        let root = self.layout.root();
        if self.exists(root) {
            return Ok(StepOutcome::skipped(format!("{} already exists", root.display())));
        }
        self.fs().create_dir_all(root)?;
        Ok(StepOutcome::completed())
    }

    fn create_virtual_env(&self) -> Result<StepOutcome, AppError> {
        if self.exists(&self.layout.venv_python()) {
            return Ok(StepOutcome::skipped("virtual environment already exists"));
        }
        let venv = self.absolute(&self.layout.venv_dir());
        let venv = venv.to_string_lossy();
        self.spawn(PathBuf::from(&self.config.python), &["-m", "venv", venv.as_ref()])?;
        Ok(StepOutcome::completed())
    }

    fn install_framework(&self) -> Result<StepOutcome, AppError> {
        if self.exists(&self.layout.venv_bin("django-admin")) {
            return Ok(StepOutcome::skipped(format!(
                "{} already installed",
                self.config.framework_package
            )));
        }
        let pip = self.absolute(&self.layout.venv_bin("pip"));
        self.spawn(pip, &["install", self.config.framework_package.as_str()])?;
        Ok(StepOutcome::completed())
    }

    fn start_project(&self) -> Result<StepOutcome, AppError> {
        if self.exists(&self.layout.manage_py()) {
            return Ok(StepOutcome::skipped("manage.py already exists"));
        }
        let admin = self.absolute(&self.layout.venv_bin("django-admin"));
        let root = self.absolute(self.layout.root());
        let root = root.to_string_lossy();
        let backend = self.config.backend_module.as_str();
        self.spawn(admin, &["startproject", backend, root.as_ref()])?;
        Ok(StepOutcome::completed())
    }

    fn start_apps(&self) -> Result<StepOutcome, AppError> {
        let mut started = 0;
        for app in &self.config.apps {
            if self.exists(&self.layout.app_dir(app.name.as_str())) {
                tracing::debug!(app = %app.name, "app directory exists");
                continue;
            }
            let python = self.absolute(&self.layout.venv_python());
            self.spawn(python, &["manage.py", "startapp", app.name.as_str()])?;
            started += 1;
        }
        if started == 0 {
            return Ok(StepOutcome::skipped("all apps already exist"));
        }
        Ok(StepOutcome::completed())
    }

    fn write_templates(&self) -> Result<StepOutcome, AppError> {
        // `'DIRS'` points here, so the directory exists even with no pages.
        let templates_dir = self.layout.templates_dir();
        let created_dir = !self.exists(&templates_dir);
        self.fs().create_dir_all(&templates_dir)?;

        let mut written = 0;
        let mut warnings = Vec::new();
        for &kind in &self.config.templates {
            let target = self.layout.template_target(kind);
            if self.exists(&target) {
                continue;
            }
            match self.ctx.templates().load(kind) {
                Ok(content) => {
                    self.fs().write_file(&target, &content)?;
                    written += 1;
                }
                Err(err @ AppError::TemplateSourceMissing { .. }) => {
                    tracing::warn!(template = %kind, "{}", err);
                    warnings.push(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }
        if !created_dir && written == 0 && warnings.is_empty() {
            return Ok(StepOutcome::skipped("templates already present"));
        }
        Ok(StepOutcome::Completed { warnings })
    }

    fn write_static(&self) -> Result<StepOutcome, AppError> {
        let target = self.layout.stylesheet_target();
        if self.exists(&target) {
            return Ok(StepOutcome::skipped(format!("{} already exists", target.display())));
        }
        self.fs().create_dir_all(&self.layout.static_dir())?;

        let source = self.layout.stylesheet_source();
        if !self.exists(&source) {
            let warning = format!("Stylesheet not found at {}", source.display());
            tracing::warn!("{}", warning);
            return Ok(StepOutcome::Completed { warnings: vec![warning] });
        }
        self.fs().copy_file(&source, &target)?;
        Ok(StepOutcome::completed())
    }

    fn write_modules(&self) -> Result<StepOutcome, AppError> {
        let mut files = assets::backend_modules(self.config, self.layout)?;
        for app in &self.config.apps {
            files.extend(assets::app_modules(app, &self.layout.app_dir(app.name.as_str()))?);
        }

        let mut written = 0;
        for GeneratedFile { path, content } in files {
            if self.exists(&path) && self.fs().read_file(&path)? == content {
                continue;
            }
            self.fs().write_file(&path, &content)?;
            written += 1;
        }
        if written == 0 {
            return Ok(StepOutcome::skipped("modules up to date"));
        }
        Ok(StepOutcome::completed())
    }

    fn patch_settings(&self) -> Result<StepOutcome, AppError> {
        let plan = SettingsPatch::for_project(self.config);
        let report =
            patch_settings(self.fs(), &self.layout.settings_file(), &plan, self.options.strict)?;

        let warnings: Vec<String> = report
            .missing_markers()
            .filter_map(|entry| match &entry.outcome {
                RuleOutcome::MarkerMissing { marker } => {
                    Some(format!("{}: marker '{}' not found", entry.rule, marker))
                }
                _ => None,
            })
            .collect();
        if !report.changed() && warnings.is_empty() {
            return Ok(StepOutcome::skipped("settings already patched"));
        }
        Ok(StepOutcome::Completed { warnings })
    }

    fn write_gitignore(&self) -> Result<StepOutcome, AppError> {
        let path = self.layout.gitignore();
        if self.exists(&path) {
            return Ok(StepOutcome::skipped(".gitignore already exists"));
        }
        self.fs().write_file(&path, GITIGNORE_CONTENT)?;
        Ok(StepOutcome::completed())
    }

    fn migrate(&self) -> Result<StepOutcome, AppError> {
        let python = self.absolute(&self.layout.venv_python());
        self.spawn(python, &["manage.py", "migrate"])?;
        Ok(StepOutcome::completed())
    }
}
