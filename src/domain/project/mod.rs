//! Generated project structure: paths, template kinds, fixed file contents.

mod gitignore;
mod layout;
mod template_kind;

pub use gitignore::GITIGNORE_CONTENT;
pub use layout::ProjectLayout;
pub use template_kind::TemplateKind;
