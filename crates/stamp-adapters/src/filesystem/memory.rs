//! In-memory filesystem adapter for testing.
//!
//! Behaves like a strict local disk: directories are created one level at a
//! time, files only inside existing directories, and `create_file` refuses
//! to clobber. Creation order is recorded so tests can assert on it.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stamp_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StampResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    created: Vec<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new memory filesystem holding only `/`.
    pub fn new() -> Self {
        let mut inner = MemoryFilesystemInner::default();
        inner.directories.insert(PathBuf::from("/"));
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Pre-create `path` and all its ancestors (test setup).
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            for ancestor in path.as_ref().ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    inner.directories.insert(ancestor.to_path_buf());
                }
            }
        }
        self
    }

    /// Pre-create a file with `content`, ancestors included (test setup).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        let this = match path.parent() {
            Some(parent) => self.with_directory(parent),
            None => self,
        };
        if let Ok(mut inner) = this.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        this
    }

    /// Make every write below `path` fail.
    pub fn with_read_only(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
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
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Directories and files created through the port, in order.
    pub fn creation_log(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.created.clone())
            .unwrap_or_default()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> StampResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(failure(path, "Permission denied"));
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> StampResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(failure(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }

    fn occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner.read().is_ok_and(|inner| inner.occupied(path))
    }

    fn create_dir(&self, path: &Path) -> StampResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterPoisoned)?;

        inner.check_writable(path)?;
        inner.check_parent(path)?;
        if inner.occupied(path) {
            return Err(failure(path, "Already exists"));
        }

        inner.directories.insert(path.to_path_buf());
        inner.created.push(path.to_path_buf());
        Ok(())
    }

    fn create_file(&self, path: &Path) -> StampResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterPoisoned)?;

        inner.check_writable(path)?;
        inner.check_parent(path)?;
        if inner.occupied(path) {
            return Err(failure(path, "Already exists"));
        }

        inner.files.insert(path.to_path_buf(), String::new());
        inner.created.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StampResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterPoisoned)?;

        inner.check_writable(path)?;
        inner.check_parent(path)?;
        if inner.directories.contains(path) {
            return Err(failure(path, "Is a directory"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn failure(path: &Path, reason: &str) -> stamp_core::error::StampError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}
