//! Concrete implementations of the ports.

pub mod assets;
pub mod filesystem;
pub mod process_command;
pub mod template;
pub mod template_files;

pub use filesystem::FilesystemStore;
pub use process_command::CommandProcessRunner;
pub use template_files::FilesDirTemplateSource;
