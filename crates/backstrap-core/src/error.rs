//! Unified error handling for backstrap core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use std::path::Path;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for backstrap core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackstrapError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl BackstrapError {
    /// Shorthand for a filesystem failure at `path`.
    pub fn filesystem(path: &Path, operation: &str, err: impl std::fmt::Display) -> Self {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to {operation}: {err}"),
        }
        .into()
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` if the project root already existed.
    pub fn is_collision(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::ProjectExists { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type BackstrapResult<T> = Result<T, BackstrapError>;
