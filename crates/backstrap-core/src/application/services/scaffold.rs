//! Filesystem scaffolder - materializes a [`ScaffoldPlan`] under a root.
//!
//! Every operation is "create if absent": re-applying a plan is harmless
//! and never truncates an existing file. Failures propagate untouched and
//! nothing is rolled back, so a partial scaffold stays on disk for the user
//! to inspect.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ports::{Filesystem, ProgressReporter},
        services::init::{ScaffoldStep, tracked},
    },
    domain::{RelativePath, ScaffoldPlan},
    error::BackstrapResult,
};

/// What a scaffold pass actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeOutcome {
    pub directories_created: usize,
    pub files_created: usize,
    /// Files left alone because something already existed at the path.
    pub files_skipped: usize,
}

/// Applies directory and file plans through the [`Filesystem`] port.
pub struct Scaffolder<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Scaffolder<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Directories first, then files, each reported as its own phase.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn create_tree(
        &self,
        root: &Path,
        plan: &ScaffoldPlan,
        progress: &dyn ProgressReporter,
    ) -> BackstrapResult<TreeOutcome> {
        let directories_created = tracked(progress, ScaffoldStep::Directories, || {
            self.create_directories(root, plan.directories())
        })?;
        let (files_created, files_skipped) = tracked(progress, ScaffoldStep::Files, || {
            self.create_files(root, plan.files())
        })?;
        Ok(TreeOutcome {
            directories_created,
            files_created,
            files_skipped,
        })
    }

    /// Ensure every directory exists. Returns how many were missing.
    pub fn create_directories(
        &self,
        root: &Path,
        directories: &[RelativePath],
    ) -> BackstrapResult<usize> {
        let mut created = 0;
        for dir in directories {
            let path = dir.resolve(root);
            if self.filesystem.exists(&path) {
                trace!(path = %path.display(), "directory already present");
                continue;
            }
            self.filesystem.create_dir_all(&path)?;
            created += 1;
        }
        debug!(created, planned = directories.len(), "directories ensured");
        Ok(created)
    }

    /// Create each file empty unless it exists. Returns `(created, skipped)`.
    pub fn create_files(
        &self,
        root: &Path,
        files: &[RelativePath],
    ) -> BackstrapResult<(usize, usize)> {
        let mut created = 0;
        let mut skipped = 0;
        for file in files {
            let path = file.resolve(root);
            if self.filesystem.create_file_if_absent(&path)? {
                created += 1;
            } else {
                trace!(path = %path.display(), "file already present, left untouched");
                skipped += 1;
            }
        }
        debug!(created, skipped, "placeholder files ensured");
        Ok((created, skipped))
    }
}
