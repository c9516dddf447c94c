//! Embedded scaffold assets rendered into generated projects.

mod scaffold_modules;

pub use scaffold_modules::{GeneratedFile, app_modules, backend_modules};
