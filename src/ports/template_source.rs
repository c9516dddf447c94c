use crate::domain::{AppError, TemplateKind};

/// Port for reading page template sources.
pub trait TemplateSource {
    /// Load the raw text of `kind`.
    ///
    /// A missing source is `AppError::TemplateSourceMissing`.
    fn load(&self, kind: TemplateKind) -> Result<String, AppError>;
}
