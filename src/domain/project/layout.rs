use std::path::{Path, PathBuf};

use crate::domain::config::ProjectConfig;

use super::TemplateKind;

#[cfg(windows)]
const VENV_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const VENV_BIN_DIR: &str = "bin";

/// Paths of a generated project, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    backend_module: String,
    template_dir: String,
    static_dir: String,
    files_dir: PathBuf,
    stylesheet: String,
}

impl ProjectLayout {
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            root: PathBuf::from(&config.name),
            backend_module: config.backend_module.to_string(),
            template_dir: config.template_dir.clone(),
            static_dir: config.static_dir.clone(),
            files_dir: PathBuf::from(&config.files_dir),
            stylesheet: config.stylesheet.clone(),
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manage_py(&self) -> PathBuf {
        self.root.join("manage.py")
    }

    pub fn backend_dir(&self) -> PathBuf {
        self.root.join(&self.backend_module)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.backend_dir().join("settings.py")
    }

    pub fn app_dir(&self, app: &str) -> PathBuf {
        self.root.join(app)
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(".venv")
    }

    /// Executable inside the virtual environment.
    pub fn venv_bin(&self, program: &str) -> PathBuf {
        let name = if cfg!(windows) { format!("{}.exe", program) } else { program.to_string() };
        self.venv_dir().join(VENV_BIN_DIR).join(name)
    }

    pub fn venv_python(&self) -> PathBuf {
        self.venv_bin("python")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.template_dir)
    }

    pub fn template_target(&self, kind: TemplateKind) -> PathBuf {
        self.templates_dir().join(kind.target_path())
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(&self.static_dir)
    }

    pub fn stylesheet_target(&self) -> PathBuf {
        self.static_dir().join(&self.stylesheet)
    }

    pub fn gitignore(&self) -> PathBuf {
        self.root.join(".gitignore")
    }

    /// Source tree holding template and stylesheet files.
    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    pub fn stylesheet_source(&self) -> PathBuf {
        self.files_dir.join(&self.stylesheet)
    }
}
