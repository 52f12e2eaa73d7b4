// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy of the failing step's error)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid artifact id '{value}': {reason}")]
    InvalidArtifactId { value: String, reason: &'static str },

    #[error("invalid Java package '{value}' (lowercase dotted, e.g. com.acme.myservice)")]
    InvalidJavaPackage { value: String },

    #[error("invalid Java identifier '{value}'")]
    InvalidJavaIdentifier { value: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Document Structure Errors
    // ========================================================================
    #[error("malformed document: missing {missing}")]
    MalformedDocument { missing: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArtifactId { .. } => vec![
                "Use kebab-case: a-z, 0-9 and '-' (must start with a letter)".into(),
                "Example: shared-kernel, observability, bff".into(),
            ],
            Self::InvalidJavaPackage { value } => vec![
                "Java packages are lowercase, dot separated, with at least two segments".into(),
                format!("Got: {}", value),
            ],
            Self::InvalidJavaIdentifier { .. } => vec![
                "Start with a letter; use letters, digits, '-' or '_' afterwards".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Pass it as a flag or run interactively".into(),
            ],
            Self::MalformedDocument { missing } => vec![
                format!("The document is missing {}", missing),
                "Repair the file by hand and re-run the generator".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArtifactId { .. }
            | Self::InvalidJavaPackage { .. }
            | Self::InvalidJavaIdentifier { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::MalformedDocument { .. } => ErrorCategory::Document,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Document,
}
