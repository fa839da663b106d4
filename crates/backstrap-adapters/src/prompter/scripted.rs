//! Prompter with canned answers, for tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use backstrap_core::{
    application::{ApplicationError, ports::Prompter},
    domain::FrameworkChoice,
    error::BackstrapResult,
};

/// Returns fixed answers and counts how often each prompt was shown.
///
/// Clones share the counters, so a test can keep a handle after boxing one
/// into a service.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    project_name: Option<String>,
    framework: Option<FrameworkChoice>,
    name_prompts: Arc<AtomicUsize>,
    framework_prompts: Arc<AtomicUsize>,
}

impl ScriptedPrompter {
    pub fn new(project_name: Option<&str>, framework: Option<FrameworkChoice>) -> Self {
        Self {
            project_name: project_name.map(str::to_owned),
            framework,
            ..Self::default()
        }
    }

    /// Answers only the framework prompt.
    pub fn framework(choice: FrameworkChoice) -> Self {
        Self::new(None, Some(choice))
    }

    pub fn name_prompts(&self) -> usize {
        self.name_prompts.load(Ordering::SeqCst)
    }

    pub fn framework_prompts(&self) -> usize {
        self.framework_prompts.load(Ordering::SeqCst)
    }
}

impl Prompter for ScriptedPrompter {
    fn resolve_project_name(&self) -> BackstrapResult<String> {
        self.name_prompts.fetch_add(1, Ordering::SeqCst);
        self.project_name
            .clone()
            .ok_or_else(|| ApplicationError::PromptCancelled.into())
    }

    fn resolve_framework_choice(&self) -> BackstrapResult<FrameworkChoice> {
        self.framework_prompts.fetch_add(1, Ordering::SeqCst);
        self.framework
            .ok_or_else(|| ApplicationError::PromptCancelled.into())
    }
}
