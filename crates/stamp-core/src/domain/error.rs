// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::naming::NameRejection;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: NameRejection },

    #[error("Unknown kind '{0}'")]
    UnknownKind(String),

    #[error("Invalid destination '{path}': {reason}")]
    InvalidDestination { path: String, reason: String },

    #[error("Path '{path}' is outside the project root '{root}'")]
    OutsideProject { path: String, root: String },

    #[error("Cannot derive a project name from root '{0}'")]
    InvalidProjectRoot(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { reason, .. } => match reason {
                NameRejection::LettersOnly => vec![
                    "Names may only contain the letters a-z and A-Z".into(),
                    "Remove digits, underscores, hyphens and spaces".into(),
                ],
                NameRejection::Casing(casing) => vec![
                    format!("This kind expects {} names", casing.label()),
                    format!("Example: {}", casing.example()),
                ],
            },
            Self::UnknownKind(_) => vec![
                "Try: stamp kinds to see what can be generated".into(),
            ],
            Self::InvalidDestination { .. } => vec![
                "Destinations are relative to the project root".into(),
                "Parent directory segments ('..') are not allowed".into(),
            ],
            Self::OutsideProject { root, .. } => vec![
                format!("Pick a directory inside {}", root),
                "Or pass --root to point at a different project".into(),
            ],
            Self::InvalidProjectRoot(_) => vec![
                "Run stamp from inside the project, or pass --root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidDestination { .. }
            | Self::OutsideProject { .. } => ErrorCategory::Validation,
            Self::UnknownKind(_) => ErrorCategory::NotFound,
            Self::InvalidProjectRoot(_) => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
}
