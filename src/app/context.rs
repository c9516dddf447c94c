use crate::ports::{ProcessRunner, ProjectFilesystem, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, P: ProcessRunner, T: TemplateSource> {
    filesystem: F,
    processes: P,
    templates: T,
}

impl<F: ProjectFilesystem, P: ProcessRunner, T: TemplateSource> AppContext<F, P, T> {
    /// Create a new application context.
    pub fn new(filesystem: F, processes: P, templates: T) -> Self {
        Self { filesystem, processes, templates }
    }

    /// Get a reference to the working-directory filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the process runner.
    pub fn processes(&self) -> &P {
        &self.processes
    }

    /// Get a reference to the page template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
