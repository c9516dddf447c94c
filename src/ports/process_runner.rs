use std::path::Path;

use crate::domain::AppError;

/// Port for spawning external programs (interpreter, pip, generators).
///
/// Implementations block until the program exits and inherit stdio.
pub trait ProcessRunner {
    /// Run `program` with `args` in `cwd`.
    ///
    /// A non-zero exit status is an `AppError::CommandFailed`.
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<(), AppError>;
}
