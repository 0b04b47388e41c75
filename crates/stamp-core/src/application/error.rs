//! Application layer errors.
//!
//! These errors represent failures while carrying out a plan, not naming or
//! path rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A plan names the same file twice.
    #[error("Plan contains duplicate path {path}")]
    DuplicatePath { path: PathBuf },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Filesystem adapter state is poisoned")]
    AdapterPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were kept".into(),
            ],
            Self::DuplicatePath { .. } => vec![
                "This is a template bug, please report it".into(),
            ],
            Self::AdapterPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::DuplicatePath { .. } | Self::AdapterPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
