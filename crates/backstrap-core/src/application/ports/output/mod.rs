//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.

use std::path::Path;

use crate::application::services::init::ScaffoldStep;
use crate::domain::{FrameworkChoice, ProjectRequest};
use crate::error::BackstrapResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `backstrap_adapters::filesystem::LocalFilesystem` (production)
/// - `backstrap_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> BackstrapResult<()>;

    /// Create an empty file unless something already exists at `path`.
    ///
    /// Returns `true` if the file was created. Existing content is never
    /// truncated.
    fn create_file_if_absent(&self, path: &Path) -> BackstrapResult<bool>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> BackstrapResult<()>;

    /// Check if any entry exists at path.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external input collaborator.
///
/// Implemented by:
/// - `backstrap_cli::prompt::DialoguerPrompter` (interactive terminal)
/// - `backstrap_adapters::prompter::EnvPrompter` (environment variables)
/// - `backstrap_adapters::prompter::ScriptedPrompter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask for the project name. Only called when none was given as an
    /// argument.
    fn resolve_project_name(&self) -> BackstrapResult<String>;

    /// Ask which framework to scaffold for. Always called, after the
    /// collision check.
    fn resolve_framework_choice(&self) -> BackstrapResult<FrameworkChoice>;
}

/// Presentation hooks around each workflow phase.
///
/// The core never prints; the CLI decides how (or whether) to show these.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    /// Inputs are resolved and writing is about to begin.
    fn project_started(&self, request: &ProjectRequest);

    fn step_started(&self, step: ScaffoldStep);

    fn step_finished(&self, step: ScaffoldStep);

    fn step_failed(&self, step: ScaffoldStep);
}

/// Reporter that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn project_started(&self, _request: &ProjectRequest) {}
    fn step_started(&self, _step: ScaffoldStep) {}
    fn step_finished(&self, _step: ScaffoldStep) {}
    fn step_failed(&self, _step: ScaffoldStep) {}
}
