use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// Runs external programs with `std::process::Command`, inheriting stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

fn display_command(program: &Path, args: &[String]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<(), AppError> {
        let command = display_command(program, args);
        tracing::debug!(%command, cwd = %cwd.display(), "spawning process");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| AppError::command_failed(&command, e.to_string()))?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::command_failed(command, details));
        }

        Ok(())
    }
}
