// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so ports can hand them back from mocks and fakes)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Unknown framework '{value}'")]
    UnknownFramework {
        value: String,
        available: Vec<&'static str>,
    },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Provide a project name: backstrap my-api".into(),
                "Or run without arguments and type one at the prompt".into(),
            ],
            Self::UnknownFramework { value, available } => {
                let mut suggestions = vec![
                    format!("'{value}' is not a known framework"),
                    "Available frameworks:".into(),
                ];
                for fw in available {
                    suggestions.push(format!("  • {fw}"));
                }
                suggestions.push("List them with details: backstrap list".into());
                suggestions
            }
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => vec![
                "The scaffold plan is malformed".into(),
                "This is a bug in backstrap, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName | Self::UnknownFramework { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
