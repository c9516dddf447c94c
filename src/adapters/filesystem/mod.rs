//! Filesystem adapter for the `ProjectFilesystem` port.
//!
//! `FilesystemStore` owns the working-directory root and enforces
//! path-traversal safety on every operation.

mod project_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a working directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The working-directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` against the root, rejecting anything that lands outside.
    ///
    /// `..` is resolved lexically, so a project directory that does not exist
    /// yet is checked the same way as one on disk.
    pub(crate) fn checked_path(&self, path: &Path) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(path);
        if !lexical_normalize(&full_path).starts_with(lexical_normalize(&self.root)) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }
        Ok(full_path)
    }
}

/// Drop `.` and fold `..` into its parent without touching the disk.
fn lexical_normalize(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut out, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
        out
    })
}
