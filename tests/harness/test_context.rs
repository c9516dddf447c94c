//! Shared testing harness for `djboot` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::DJANGO_SETTINGS;

/// Testing harness providing an isolated working directory for CLI runs.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as cwd for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work dir.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("djboot").expect("Failed to locate djboot binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work dir, creating parents.
    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Place a freshly generated settings module at `relative`.
    pub(crate) fn write_settings(&self, relative: &str) -> PathBuf {
        self.write(relative, DJANGO_SETTINGS)
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Directory outside the work dir, for paths that must not be scoped to it.
    pub(crate) fn outside_dir(&self) -> PathBuf {
        let dir = self.root.path().join("outside");
        fs::create_dir_all(&dir).expect("Failed to create outside directory");
        dir
    }
}
