//! Working-directory filesystem operations.
//!
//! This port provides generic file I/O scoped to the directory `djboot`
//! runs in. It does not own project structure semantics; those belong to
//! `domain::project::ProjectLayout`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem operations during project setup.
///
/// All `path` arguments are relative to the filesystem root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's content in one step, creating parent directories as
    /// needed. Readers never observe a partially written file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy a file verbatim, creating parent directories as needed.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. No-op if present.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the root.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
