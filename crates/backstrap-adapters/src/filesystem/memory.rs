//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use backstrap_core::{
    application::{ApplicationError, ports::Filesystem},
    error::BackstrapResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory (and its parents) without counting it as a write.
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            insert_ancestors(&mut inner.directories, path.as_ref());
        }
        self
    }

    /// Seed a file without counting it as a write.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of mutating calls that changed state.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) -> bool {
    let mut current = PathBuf::new();
    let mut added = false;
    for component in path.components() {
        current.push(component);
        added |= directories.insert(current.clone());
    }
    added
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> BackstrapResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to create directory: a file exists at this path".into(),
            }
            .into());
        }
        if insert_ancestors(&mut inner.directories, path) {
            inner.writes += 1;
        }
        Ok(())
    }

    fn create_file_if_absent(&self, path: &Path) -> BackstrapResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Ok(false);
        }
        check_parent(&inner, path)?;

        inner.files.insert(path.to_path_buf(), String::new());
        inner.writes += 1;
        Ok(true)
    }

    fn write_file(&self, path: &Path, content: &str) -> BackstrapResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        check_parent(&inner, path)?;

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn check_parent(inner: &MemoryFilesystemInner, path: &Path) -> BackstrapResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
    }
    Ok(())
}
