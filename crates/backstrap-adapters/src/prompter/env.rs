//! Prompter backed by environment variables.

use backstrap_core::{
    application::{ApplicationError, ports::Prompter},
    domain::FrameworkChoice,
    error::BackstrapResult,
};
use tracing::debug;

/// Variable consulted for the project name.
pub const PROJECT_NAME_VAR: &str = "BACKSTRAP_PROJECT_NAME";

/// Variable consulted for the framework identifier.
pub const FRAMEWORK_VAR: &str = "BACKSTRAP_FRAMEWORK";

/// Answers prompts from values captured at construction.
///
/// Used when no terminal is attached (CI, scripts, piped stdin).
#[derive(Debug, Clone, Default)]
pub struct EnvPrompter {
    project_name: Option<String>,
    framework: Option<String>,
}

impl EnvPrompter {
    pub fn new(project_name: Option<String>, framework: Option<String>) -> Self {
        Self {
            project_name,
            framework,
        }
    }

    /// Capture [`PROJECT_NAME_VAR`] and [`FRAMEWORK_VAR`] from the process
    /// environment.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(PROJECT_NAME_VAR).ok(),
            std::env::var(FRAMEWORK_VAR).ok(),
        )
    }
}

impl Prompter for EnvPrompter {
    fn resolve_project_name(&self) -> BackstrapResult<String> {
        debug!(variable = PROJECT_NAME_VAR, "resolving project name from environment");
        self.project_name.clone().ok_or_else(|| {
            ApplicationError::PromptUnavailable {
                what: "project name",
                variable: PROJECT_NAME_VAR,
            }
            .into()
        })
    }

    fn resolve_framework_choice(&self) -> BackstrapResult<FrameworkChoice> {
        debug!(variable = FRAMEWORK_VAR, "resolving framework from environment");
        let raw = self
            .framework
            .as_deref()
            .ok_or(ApplicationError::PromptUnavailable {
                what: "framework choice",
                variable: FRAMEWORK_VAR,
            })?;
        Ok(raw.parse::<FrameworkChoice>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backstrap_core::{domain::DomainError, error::BackstrapError};

    #[test]
    fn returns_captured_values() {
        let prompter = EnvPrompter::new(Some("svc".into()), Some("expressMongo".into()));
        assert_eq!(prompter.resolve_project_name().unwrap(), "svc");
        assert_eq!(
            prompter.resolve_framework_choice().unwrap(),
            FrameworkChoice::ExpressMongo
        );
    }

    #[test]
    fn missing_values_name_the_variable() {
        let prompter = EnvPrompter::default();
        let err = prompter.resolve_framework_choice().unwrap_err();
        assert!(err.to_string().contains(FRAMEWORK_VAR));
        let err = prompter.resolve_project_name().unwrap_err();
        assert!(err.to_string().contains(PROJECT_NAME_VAR));
    }

    #[test]
    fn unknown_framework_is_rejected() {
        let prompter = EnvPrompter::new(None, Some("koa".into()));
        assert!(matches!(
            prompter.resolve_framework_choice(),
            Err(BackstrapError::Domain(DomainError::UnknownFramework { .. }))
        ));
    }
}
