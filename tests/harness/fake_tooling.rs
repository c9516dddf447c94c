//! Stand-in for the Python interpreter, pip and django-admin.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use djboot::{AppError, ProcessRunner};

use super::DJANGO_SETTINGS;

/// Records every command and creates the files the real tools would.
///
/// Clones share the same log, so a test can keep a handle after passing
/// one into the pipeline.
#[derive(Clone, Default)]
pub(crate) struct FakeTooling {
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeTooling {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Commands seen so far, as `<program file name> <args...>`.
    pub(crate) fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeTooling {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<(), AppError> {
        let name = program.file_name().unwrap().to_string_lossy().to_string();
        let mut line = vec![name];
        line.extend(args.iter().cloned());
        self.log.lock().unwrap().push(line.join(" "));

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["-m", "venv", dir] => {
                let bin = PathBuf::from(dir).join("bin");
                fs::create_dir_all(&bin)?;
                fs::write(bin.join("python"), "")?;
            }
            ["install", _] => {
                fs::write(program.parent().unwrap().join("django-admin"), "")?;
            }
            ["startproject", module, target] => {
                let backend = Path::new(target).join(module);
                fs::create_dir_all(&backend)?;
                fs::write(Path::new(target).join("manage.py"), "")?;
                fs::write(backend.join("settings.py"), DJANGO_SETTINGS)?;
                fs::write(backend.join("urls.py"), "urlpatterns = []\n")?;
            }
            ["manage.py", "startapp", app] => {
                fs::create_dir_all(cwd.join(app))?;
                fs::write(cwd.join(app).join("models.py"), "")?;
            }
            _ => {}
        }
        Ok(())
    }
}
