//! CLI-level errors: what the user sees on stderr and the process exit code.
//!
//! Core errors pass through untouched; their category picks the exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use backstrap_core::error::BackstrapError;

pub use backstrap_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `backstrap-core` or an adapter.
    #[error(transparent)]
    Core(#[from] BackstrapError),

    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Show the active file with 'backstrap config path'".into(),
                "Write a default one with 'backstrap config init --force'".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("While {message}"),
                "Check that the directory is writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Conflict      |  1   |
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Conflict => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Coloured rendering for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };
        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                out.push_str(&format!("  {}\n", paint(&line, |t| t.dimmed().to_string())));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Run again with -v / --verbose for more details.", |t| {
                    t.dimmed().to_string()
                })
            ));
        }
        out
    }

    /// Record the failure; `-v` makes these visible alongside the rendering.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::Conflict => {
                tracing::warn!(category = ?self.category(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), "{self}")
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!(%cause, "underlying error");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, cancelled prompt).
    UserError,
    /// The target already exists.
    Conflict,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backstrap_core::{application::ApplicationError, domain::DomainError};
    use std::io;
    use std::path::PathBuf;

    fn collision() -> CliError {
        CliError::Core(
            ApplicationError::ProjectExists {
                name: "myapp".into(),
                path: PathBuf::from("/work/myapp"),
            }
            .into(),
        )
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn collision_exits_one() {
        let err = collision();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn validation_exits_two() {
        let unknown: BackstrapError = DomainError::UnknownFramework {
            value: "koa".into(),
            available: vec!["express"],
        }
        .into();
        assert_eq!(CliError::Core(unknown).exit_code(), 2);
        assert_eq!(
            CliError::Core(DomainError::EmptyProjectName.into()).exit_code(),
            2
        );
        assert_eq!(
            CliError::Core(ApplicationError::PromptCancelled.into()).exit_code(),
            2
        );
    }

    #[test]
    fn configuration_exits_four() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn filesystem_failure_exits_one() {
        let err: CliError =
            BackstrapError::filesystem(std::path::Path::new("/ro"), "create directory", "denied")
                .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_exits_one() {
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn core_message_is_shown_verbatim() {
        assert_eq!(
            collision().to_string(),
            "Project 'myapp' already exists at /work/myapp"
        );
    }

    #[test]
    fn format_plain_contains_header_and_suggestions() {
        let s = collision().format_plain(false);
        assert!(s.contains("\u{2717} Error: Project 'myapp' already exists"));
        assert!(!s.contains('\x1b'));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("Choose a different project name"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("disk on fire"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk on fire"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn unknown_framework_lists_identifiers() {
        let err = CliError::Core(
            DomainError::UnknownFramework {
                value: "koa".into(),
                available: vec!["express", "expressMongo", "expressSQL"],
            }
            .into(),
        );
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("expressMongo")));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "writing config");
        match cli {
            Err(CliError::IoError { message, .. }) => assert_eq!(message, "writing config"),
            other => panic!("expected IoError, got {other:?}"),
        }
    }
}
