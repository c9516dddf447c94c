//! Process runner double that mimics the Python tooling on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

use super::DJANGO_SETTINGS;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// Program file name followed by its arguments, space-separated.
    pub fn summary(&self) -> String {
        let program = self.program.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let mut parts = vec![program.to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Records invocations and writes the files the real tools would create.
#[derive(Default)]
pub struct FakeProcessRunner {
    pub invocations: Mutex<Vec<Invocation>>,
    fail_on: Mutex<Option<String>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation whose summary contains `needle`.
    pub fn fail_on(&self, needle: &str) {
        *self.fail_on.lock().unwrap() = Some(needle.to_string());
    }

    pub fn summaries(&self) -> Vec<String> {
        self.invocations.lock().unwrap().iter().map(Invocation::summary).collect()
    }

    fn simulate(&self, program: &Path, args: &[String], cwd: &Path) -> std::io::Result<()> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["-m", "venv", dir] => {
                let bin = Path::new(dir).join("bin");
                fs::create_dir_all(&bin)?;
                fs::write(bin.join("python"), "")?;
            }
            ["install", ..] => {
                let bin = program.parent().unwrap_or(cwd);
                fs::write(bin.join("django-admin"), "")?;
            }
            ["startproject", module, target] => {
                let target = Path::new(target);
                let backend = target.join(module);
                fs::create_dir_all(&backend)?;
                fs::write(target.join("manage.py"), "")?;
                fs::write(backend.join("__init__.py"), "")?;
                fs::write(backend.join("settings.py"), DJANGO_SETTINGS)?;
                fs::write(backend.join("urls.py"), "urlpatterns = []\n")?;
            }
            ["manage.py", "startapp", app] => {
                let dir = cwd.join(app);
                fs::create_dir_all(&dir)?;
                for module in ["__init__.py", "models.py", "views.py", "admin.py"] {
                    fs::write(dir.join(module), "")?;
                }
            }
            ["manage.py", "migrate"] => {
                fs::write(cwd.join("db.sqlite3"), "")?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<(), AppError> {
        let invocation = Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        };
        let summary = invocation.summary();
        self.invocations.lock().unwrap().push(invocation);

        if let Some(needle) = self.fail_on.lock().unwrap().as_deref()
            && summary.contains(needle)
        {
            return Err(AppError::command_failed(summary, "exited with status 1"));
        }

        self.simulate(program, args, cwd)?;
        Ok(())
    }
}
