use crate::validation::ValidationReport;
use mfg_domain::OptionFamily;
use mfg_kernel::security::scope::ScopedIdError;
use std::borrow::Cow;

/// Error types specific to the catalog feature.
#[mfg_derive::mfg_error]
pub enum CatalogError {
    /// The draft carries at least one blocking violation.
    #[error("Draft rejected with {} violation(s){}", blocking_count(.report), format_context(.context))]
    Rejected { report: ValidationReport, context: Option<Cow<'static, str>> },

    #[error("Variant belongs to model '{found}', expected '{expected}'{}", format_context(.context))]
    ForeignVariant { expected: String, found: String, context: Option<Cow<'static, str>> },

    #[error("Variant '{id}' not found{}", format_context(.context))]
    VariantNotFound { id: String, context: Option<Cow<'static, str>> },

    #[error("Variant '{id}' already exists{}", format_context(.context))]
    DuplicateVariant { id: String, context: Option<Cow<'static, str>> },

    /// A variant references a missing or inactive option of its model.
    #[error("Unresolved {family} option '{id}'{}", format_context(.context))]
    UnresolvedOption { family: OptionFamily, id: String, context: Option<Cow<'static, str>> },

    #[error("Scoped id error{}: {source}", format_context(.context))]
    Scope { source: ScopedIdError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn blocking_count(report: &ValidationReport) -> usize {
    report.errors().count()
}

impl CatalogError {
    /// Validation report carried by a rejection.
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected { report, .. } => Some(report),
            _ => None,
        }
    }
}
