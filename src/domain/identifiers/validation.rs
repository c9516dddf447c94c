/// Validates a Python module identifier.
///
/// Checks:
/// - Non-empty
/// - Does not start with a digit
/// - Characters are ASCII alphanumeric or '_'
pub fn validate_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates a path component for safe filesystem operations.
///
/// Used for user-provided directory names (project, templates, static)
/// to prevent path traversal.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Does not start with '.' (covers "." and "..")
/// - No null bytes
/// - Characters are alphanumeric, '-', '_' or '.'
pub fn validate_safe_path_component(component: &str) -> bool {
    if component.is_empty() || component.starts_with('.') {
        return false;
    }
    if component.contains('/') || component.contains('\\') || component.contains('\0') {
        return false;
    }
    component.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[macro_export]
macro_rules! impl_module_name {
    ($name:ident, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                if $crate::domain::identifiers::validation::validate_module_name(id) {
                    Ok(Self(id.to_string()))
                } else {
                    Err($err_variant(id.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::AppError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
