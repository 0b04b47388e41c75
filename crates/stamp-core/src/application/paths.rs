//! Path ensurer.
//!
//! Recursive directory creation and create-if-absent files on top of the
//! single-step [`Filesystem`] port.

use std::path::Path;

use tracing::trace;

use crate::{application::ports::Filesystem, error::StampResult};

/// Make sure `dir` exists, creating missing ancestors first.
///
/// No-op when `dir` already exists. Each missing level is created exactly
/// once, outermost first. Creation errors are returned as-is.
pub fn ensure_directory(fs: &dyn Filesystem, dir: &Path) -> StampResult<()> {
    if dir.as_os_str().is_empty() || fs.exists(dir) {
        return Ok(());
    }
    if let Some(parent) = dir.parent() {
        ensure_directory(fs, parent)?;
    }
    trace!(path = %dir.display(), "creating directory");
    fs.create_dir(dir)
}

/// Make sure a file exists at `path`, creating an empty one if needed.
///
/// Returns `true` when the file was created by this call and `false` when
/// something was already there.
pub fn ensure_file(fs: &dyn Filesystem, path: &Path) -> StampResult<bool> {
    if fs.exists(path) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        ensure_directory(fs, parent)?;
    }
    trace!(path = %path.display(), "creating file");
    fs.create_file(path)?;
    Ok(true)
}
