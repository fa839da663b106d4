//! Init Service - main application orchestrator.
//!
//! This service coordinates the entire workflow:
//! 1. Resolve the project name (argument, else prompt)
//! 2. Refuse if anything exists at the project root
//! 3. Prompt for the framework
//! 4. Scaffold directories, then placeholder files
//! 5. Write `package.json`
//!
//! Each step runs exactly once, in that order, with no retries.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter, Prompter},
        services::{ManifestGenerator, Scaffolder},
    },
    domain::{FrameworkChoice, ProjectRequest, ScaffoldPlan},
    error::BackstrapResult,
};

/// Phases reported to the [`ProgressReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    Directories,
    Files,
    Manifest,
}

impl ScaffoldStep {
    /// Message while the step runs.
    pub const fn running_message(self) -> &'static str {
        match self {
            Self::Directories => "Creating project directories",
            Self::Files => "Creating project files",
            Self::Manifest => "Generating package.json file",
        }
    }

    /// Message once the step succeeded.
    pub const fn done_message(self) -> &'static str {
        match self {
            Self::Directories => "Directories created.",
            Self::Files => "Files created.",
            Self::Manifest => "package.json file generated.",
        }
    }

    /// Message when the step failed.
    pub const fn failed_message(self) -> &'static str {
        match self {
            Self::Directories => "Failed to create project directories.",
            Self::Files => "Failed to create project files.",
            Self::Manifest => "Failed to generate package.json file.",
        }
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Directories => "directories",
            Self::Files => "files",
            Self::Manifest => "manifest",
        })
    }
}

/// Outcome of one successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub project_root: PathBuf,
    pub framework: FrameworkChoice,
    pub manifest_path: PathBuf,
    pub directories_created: usize,
    pub files_created: usize,
    pub files_skipped: usize,
}

/// `name` appended to `working_dir` component by component. A leading root
/// or drive prefix is dropped, so `/srv/api` lands at `<working_dir>/srv/api`.
fn project_root(working_dir: &Path, name: &str) -> PathBuf {
    let mut root = working_dir.to_path_buf();
    root.extend(
        Path::new(name)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_))),
    );
    root
}

/// Main workflow service.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
    progress: Box<dyn ProgressReporter>,
}

impl InitService {
    /// Create a service that applies the built-in backend plan.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            filesystem,
            prompter,
            progress,
        }
    }

    /// Run the workflow in `working_dir`.
    ///
    /// `name_arg` is the project name given on the command line, if any.
    #[instrument(skip_all, fields(working_dir = %working_dir.display()))]
    pub fn run(
        &self,
        name_arg: Option<String>,
        working_dir: &Path,
    ) -> BackstrapResult<ScaffoldReport> {
        let plan = ScaffoldPlan::backend()?;

        // 1. Resolve name
        let name = match name_arg {
            Some(name) => name,
            None => self.prompter.resolve_project_name()?,
        };
        if name.is_empty() {
            return Err(crate::domain::DomainError::EmptyProjectName.into());
        }

        // 2-3. Collision guard
        let project_root = project_root(working_dir, &name);
        if self.filesystem.exists(&project_root) {
            warn!(path = %project_root.display(), "project path already exists");
            return Err(ApplicationError::ProjectExists {
                name,
                path: project_root,
            }
            .into());
        }

        // 4. Framework
        let framework = self.prompter.resolve_framework_choice()?;
        let request = ProjectRequest::new(name, framework)?;

        // 5. Announce
        info!(project = request.name(), %framework, "Scaffold started");
        self.progress.project_started(&request);

        // 6. Tree
        let tree = Scaffolder::new(self.filesystem.as_ref()).create_tree(
            &project_root,
            plan,
            self.progress.as_ref(),
        )?;

        // 7. Manifest
        let manifest = ManifestGenerator::new(self.filesystem.as_ref());
        let manifest_path = tracked(self.progress.as_ref(), ScaffoldStep::Manifest, || {
            manifest.write_manifest(&project_root, request.name(), request.dependencies())
        })?;

        info!(project = request.name(), "Scaffold completed");

        Ok(ScaffoldReport {
            project_name: request.name().to_owned(),
            project_root,
            framework,
            manifest_path,
            directories_created: tree.directories_created,
            files_created: tree.files_created,
            files_skipped: tree.files_skipped,
        })
    }
}

/// Run one phase, bracketing it with progress events.
pub(crate) fn tracked<T>(
    progress: &dyn ProgressReporter,
    step: ScaffoldStep,
    f: impl FnOnce() -> BackstrapResult<T>,
) -> BackstrapResult<T> {
    progress.step_started(step);
    match f() {
        Ok(value) => {
            progress.step_finished(step);
            Ok(value)
        }
        Err(e) => {
            warn!(%step, error = %e, "step failed");
            progress.step_failed(step);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SilentProgress;
    use crate::application::ports::output::{MockFilesystem, MockProgressReporter, MockPrompter};
    use crate::domain::{DIRECTORY_PLAN, DomainError, FILE_PLAN};
    use crate::error::BackstrapError;
    use mockall::predicate::eq;

    fn happy_filesystem() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_file_if_absent().returning(|_| Ok(true));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    fn prompter_choosing(choice: FrameworkChoice) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_resolve_framework_choice()
            .times(1)
            .returning(move || Ok(choice));
        prompter
    }

    #[test]
    fn argument_name_skips_name_prompt() {
        let mut prompter = prompter_choosing(FrameworkChoice::Express);
        prompter.expect_resolve_project_name().never();

        let service = InitService::new(
            Box::new(happy_filesystem()),
            Box::new(prompter),
            Box::new(SilentProgress),
        );
        let report = service
            .run(Some("sample".into()), Path::new("/work"))
            .unwrap();

        assert_eq!(report.project_name, "sample");
        assert_eq!(report.project_root, PathBuf::from("/work/sample"));
        assert_eq!(report.manifest_path, PathBuf::from("/work/sample/package.json"));
        assert_eq!(report.directories_created, DIRECTORY_PLAN.len());
        assert_eq!(report.files_created, FILE_PLAN.len());
        assert_eq!(report.files_skipped, 0);
    }

    #[test]
    fn project_root_stays_under_working_dir() {
        let cwd = Path::new("/work");
        assert_eq!(project_root(cwd, "api"), PathBuf::from("/work/api"));
        assert_eq!(project_root(cwd, "nested/api"), PathBuf::from("/work/nested/api"));
        assert_eq!(project_root(cwd, "/srv/api"), PathBuf::from("/work/srv/api"));
        assert_eq!(project_root(cwd, " api "), PathBuf::from("/work/ api "));
    }

    #[test]
    fn absolute_name_is_scaffolded_under_working_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("/work/etc")))
            .times(1)
            .returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|p: &Path| p.starts_with("/work/etc"))
            .returning(|_| Ok(()));
        fs.expect_create_file_if_absent()
            .withf(|p: &Path| p.starts_with("/work/etc"))
            .returning(|_| Ok(true));
        fs.expect_write_file()
            .withf(|p: &Path, _| p == Path::new("/work/etc/package.json"))
            .returning(|_, _| Ok(()));

        let service = InitService::new(
            Box::new(fs),
            Box::new(prompter_choosing(FrameworkChoice::Express)),
            Box::new(SilentProgress),
        );
        let report = service.run(Some("/etc".into()), Path::new("/work")).unwrap();

        assert_eq!(report.project_name, "/etc");
        assert_eq!(report.project_root, PathBuf::from("/work/etc"));
    }

    #[test]
    fn missing_name_is_prompted() {
        let mut prompter = prompter_choosing(FrameworkChoice::ExpressSql);
        prompter
            .expect_resolve_project_name()
            .times(1)
            .returning(|| Ok("prompted".into()));

        let service = InitService::new(
            Box::new(happy_filesystem()),
            Box::new(prompter),
            Box::new(SilentProgress),
        );
        let report = service.run(None, Path::new("/work")).unwrap();
        assert_eq!(report.project_name, "prompted");
        assert_eq!(report.framework, FrameworkChoice::ExpressSql);
    }

    #[test]
    fn collision_writes_nothing_and_skips_framework_prompt() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("/work/myapp")))
            .returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_create_file_if_absent().never();
        fs.expect_write_file().never();

        let mut prompter = MockPrompter::new();
        prompter.expect_resolve_framework_choice().never();

        let service = InitService::new(Box::new(fs), Box::new(prompter), Box::new(SilentProgress));
        let err = service
            .run(Some("myapp".into()), Path::new("/work"))
            .unwrap_err();

        assert!(err.is_collision());
    }

    #[test]
    fn empty_name_is_rejected_before_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();

        let mut prompter = MockPrompter::new();
        prompter
            .expect_resolve_project_name()
            .returning(|| Ok(String::new()));
        prompter.expect_resolve_framework_choice().never();

        let service = InitService::new(Box::new(fs), Box::new(prompter), Box::new(SilentProgress));
        let err = service.run(None, Path::new("/work")).unwrap_err();
        assert_eq!(err, BackstrapError::Domain(DomainError::EmptyProjectName));
    }

    #[test]
    fn prompt_cancellation_propagates() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_resolve_framework_choice()
            .returning(|| Err(ApplicationError::PromptCancelled.into()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().never();

        let service = InitService::new(Box::new(fs), Box::new(prompter), Box::new(SilentProgress));
        let err = service
            .run(Some("app".into()), Path::new("/work"))
            .unwrap_err();
        assert_eq!(
            err,
            BackstrapError::Application(ApplicationError::PromptCancelled)
        );
    }

    #[test]
    fn manifest_failure_fails_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_file_if_absent().returning(|_| Ok(true));
        fs.expect_write_file()
            .returning(|p, _| Err(BackstrapError::filesystem(p, "write file", "no space left")));

        let mut progress = MockProgressReporter::new();
        progress.expect_project_started().times(1).return_const(());
        progress.expect_step_started().times(3).return_const(());
        progress.expect_step_finished().times(2).return_const(());
        progress
            .expect_step_failed()
            .with(eq(ScaffoldStep::Manifest))
            .times(1)
            .return_const(());

        let service = InitService::new(
            Box::new(fs),
            Box::new(prompter_choosing(FrameworkChoice::Express)),
            Box::new(progress),
        );
        let err = service
            .run(Some("app".into()), Path::new("/work"))
            .unwrap_err();
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn progress_sees_every_phase_in_order() {
        let mut progress = MockProgressReporter::new();
        let mut seq = mockall::Sequence::new();
        progress
            .expect_project_started()
            .withf(|r: &ProjectRequest| r.name() == "demo-api")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        for step in [
            ScaffoldStep::Directories,
            ScaffoldStep::Files,
            ScaffoldStep::Manifest,
        ] {
            progress
                .expect_step_started()
                .with(eq(step))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            progress
                .expect_step_finished()
                .with(eq(step))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        let service = InitService::new(
            Box::new(happy_filesystem()),
            Box::new(prompter_choosing(FrameworkChoice::ExpressMongo)),
            Box::new(progress),
        );
        service
            .run(Some("demo-api".into()), Path::new("/work"))
            .unwrap();
    }

    #[test]
    fn step_messages_are_distinct() {
        assert_eq!(
            ScaffoldStep::Directories.running_message(),
            "Creating project directories"
        );
        assert_eq!(ScaffoldStep::Files.done_message(), "Files created.");
        assert_eq!(ScaffoldStep::Manifest.to_string(), "manifest");
    }
}
