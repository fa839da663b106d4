use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Directories of a backend project, parents before children.
pub const DIRECTORY_PLAN: &[&str] = &[
    "src",
    "src/controllers",
    "src/models",
    "src/routes",
    "src/services",
    "src/middlewares",
    "src/config",
    "src/utils",
    "tests",
];

/// Placeholder files of a backend project, all created empty.
pub const FILE_PLAN: &[&str] = &[
    "src/index.js",
    "src/controllers/.gitkeep",
    "src/models/.gitkeep",
    "src/routes/.gitkeep",
    "src/services/.gitkeep",
    "src/middlewares/.gitkeep",
    "src/config/.gitkeep",
    "src/utils/.gitkeep",
    "tests/.gitkeep",
    ".gitignore",
    "README.md",
];

static BACKEND_PLAN: LazyLock<Result<ScaffoldPlan, DomainError>> =
    LazyLock::new(|| ScaffoldPlan::new(DIRECTORY_PLAN, FILE_PLAN));

/// The directory and file skeleton applied under a project root.
///
/// Directories are always materialized before files, because file paths
/// nest inside the planned directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    directories: Vec<RelativePath>,
    files: Vec<RelativePath>,
}

impl ScaffoldPlan {
    /// Build and validate a plan from raw relative paths.
    pub fn new<D, F>(directories: D, files: F) -> Result<Self, DomainError>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let directories = directories
            .into_iter()
            .map(|p| RelativePath::try_new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let files = files
            .into_iter()
            .map(|p| RelativePath::try_new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let plan = Self { directories, files };
        plan.validate()?;
        Ok(plan)
    }

    /// The built-in backend skeleton, built and validated once per process.
    pub fn backend() -> Result<&'static Self, DomainError> {
        BACKEND_PLAN.as_ref().map_err(Clone::clone)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for path in self.directories.iter().chain(&self.files) {
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn files(&self) -> &[RelativePath] {
        &self.files
    }
}
