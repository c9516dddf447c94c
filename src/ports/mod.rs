mod process_runner;
mod project_filesystem;
mod template_source;

pub use process_runner::ProcessRunner;
pub use project_filesystem::ProjectFilesystem;
pub use template_source::TemplateSource;
