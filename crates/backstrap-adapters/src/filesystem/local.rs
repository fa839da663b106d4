//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing::trace;

use backstrap_core::{
    application::ports::Filesystem,
    error::{BackstrapError, BackstrapResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BackstrapResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_file_if_absent(&self, path: &Path) -> BackstrapResult<bool> {
        // `create_new` never opens an existing entry for writing.
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                trace!(path = %path.display(), "created empty file");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(map_io_error(path, e, "create file")),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> BackstrapResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink counts as an existing entry.
        path.symlink_metadata().is_ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BackstrapError {
    BackstrapError::filesystem(path, operation, e)
}
