pub mod validation;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::impl_module_name;

/// A validated Python module name (project backend module or app).
///
/// Guarantees:
/// - Non-empty
/// - Starts with a letter or underscore
/// - Contains only ASCII alphanumerics and underscores
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl_module_name!(ModuleName, AppError::InvalidModuleName);

impl ModuleName {
    /// Build from a compile-time constant known to be valid.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(validation::validate_module_name(name));
        Self(name.to_string())
    }
}
