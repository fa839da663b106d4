//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Something already exists at the project root.
    #[error("Project '{name}' already exists at {path}")]
    ProjectExists { name: String, path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The manifest could not be encoded.
    #[error("Failed to encode package manifest: {reason}")]
    ManifestEncoding { reason: String },

    /// The input collaborator failed while prompting.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user aborted a prompt.
    #[error("Prompt cancelled")]
    PromptCancelled,

    /// No interactive terminal and no fallback value.
    #[error("No {what} available: not running in a terminal and {variable} is not set")]
    PromptUnavailable {
        what: &'static str,
        variable: &'static str,
    },

    /// A shared adapter lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path, .. } => vec![
                format!("The path '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing path: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files created before the failure were left in place".into(),
            ],
            Self::PromptCancelled => vec![
                "Operation was cancelled".into(),
                "No files were written".into(),
            ],
            Self::PromptUnavailable { variable, .. } => vec![
                format!("Set {variable} when running without a terminal"),
                "Or run backstrap from an interactive shell".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::PromptCancelled | Self::PromptUnavailable { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::ManifestEncoding { .. }
            | Self::PromptFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
