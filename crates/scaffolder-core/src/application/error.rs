//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::REPO_CONFIG_FILE;
use crate::error::ErrorCategory;

/// Errors that occur while running generators.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A document that must be mutated in place does not exist.
    #[error("Required file not found: {path}")]
    HostDocumentMissing { path: PathBuf },

    /// A document exists but lacks the structure needed to repair it.
    #[error("Malformed document {path}: {reason}")]
    MalformedHostDocument { path: PathBuf, reason: String },

    /// A create-only step found its target already on disk.
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },

    /// The lib, service or platform being created is already there.
    #[error("{what} already exists: {path}")]
    AlreadyExists { what: &'static str, path: PathBuf },

    /// A prerequisite (service, root POM) is missing.
    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: PathBuf },

    /// A value that can only come from the repo config is absent.
    #[error("Missing {key}; set it in {}", config_path.display())]
    MissingRepoDefault { key: &'static str, config_path: PathBuf },

    /// Coordinates could not be read from a POM.
    #[error("Could not determine {what} from: {path}")]
    UnresolvedCoordinates { what: &'static str, path: PathBuf },

    /// No template registered under this id.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    pub fn missing_default(key: &'static str, root: &std::path::Path) -> Self {
        Self::MissingRepoDefault {
            key,
            config_path: root.join(REPO_CONFIG_FILE),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::HostDocumentMissing { path } => vec![
                format!("Expected file: {}", path.display()),
                "Run the generator against a platform root (see: of-scaffolder platform)".into(),
            ],
            Self::MalformedHostDocument { path, .. } => vec![
                format!("Repair {} by hand and re-run", path.display()),
            ],
            Self::FileExists { path } => vec![
                format!("Remove or rename {} to regenerate it", path.display()),
            ],
            Self::AlreadyExists { what, .. } => vec![
                format!("Choose a different {} name", what.to_lowercase()),
            ],
            Self::NotFound { what, path } => vec![
                format!("{} expected at: {}", what, path.display()),
                "Check --root and the name you passed".into(),
            ],
            Self::MissingRepoDefault { key, config_path } => vec![
                format!("Add '{}' to {}", key, config_path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateNotFound { .. } => vec![
                "Check the templates.local_path override directory".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HostDocumentMissing { .. }
            | Self::NotFound { .. }
            | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FileExists { .. } | Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::MissingRepoDefault { .. } | Self::UnresolvedCoordinates { .. } => {
                ErrorCategory::Configuration
            }
            Self::MalformedHostDocument { .. } => ErrorCategory::Document,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
