use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{AppError, TemplateKind};
use crate::ports::TemplateSource;

/// Reads page templates from a local `files/` directory.
///
/// Sources are named `<kind>_template.html`.
#[derive(Debug, Clone)]
pub struct FilesDirTemplateSource {
    dir: PathBuf,
}

impl FilesDirTemplateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for FilesDirTemplateSource {
    fn load(&self, kind: TemplateKind) -> Result<String, AppError> {
        let path = self.dir.join(kind.source_file());
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::TemplateSourceMissing {
                name: kind.name().to_string(),
                path: path.display().to_string(),
            },
            _ => AppError::Io(err),
        })
    }
}
