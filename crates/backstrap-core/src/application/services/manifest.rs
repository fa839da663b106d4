//! Manifest generator - builds and writes `package.json`.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DependencySet, MANIFEST_FILE_NAME, ProjectManifest},
    error::BackstrapResult,
};

pub struct ManifestGenerator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestGenerator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write the manifest to `<root>/package.json`, replacing any previous
    /// content. Returns the written path.
    ///
    /// Write failures propagate; the caller never reports success for a
    /// manifest that is not on disk.
    #[instrument(skip_all, fields(root = %root.display(), project = project_name))]
    pub fn write_manifest(
        &self,
        root: &Path,
        project_name: &str,
        dependencies: DependencySet,
    ) -> BackstrapResult<PathBuf> {
        let manifest = ProjectManifest::new(project_name, dependencies);
        let content =
            manifest
                .to_json_pretty()
                .map_err(|e| ApplicationError::ManifestEncoding {
                    reason: e.to_string(),
                })?;

        let path = root.join(MANIFEST_FILE_NAME);
        self.filesystem.write_file(&path, &content)?;

        info!(
            path = %path.display(),
            dependencies = manifest.dependencies.len(),
            "package.json written"
        );
        Ok(path)
    }
}
