//! `ProjectFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::FilesystemStore;

impl ProjectFilesystem for FilesystemStore {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.checked_path(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        let parent = full_path.parent().unwrap_or(self.root());
        fs::create_dir_all(parent)?;

        // Stage next to the target so the rename never crosses filesystems.
        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&full_path).map_err(|err| AppError::from(err.error))?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let source = self.checked_path(from)?;
        let target = self.checked_path(to)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, target)?;
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        match self.checked_path(path) {
            Ok(full_path) => full_path.exists(),
            Err(_) => false,
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}
