//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.

use std::path::Path;

use crate::error::StampResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stamp_adapters::filesystem::LocalFilesystem` (production)
/// - `stamp_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Operations are deliberately single-step: recursive directory creation
/// and the no-overwrite rule live in `application::paths`, on top of this
/// port, so every adapter behaves the same.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create one directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> StampResult<()>;

    /// Create an empty file. The parent must already exist.
    fn create_file(&self, path: &Path) -> StampResult<()>;

    /// Replace the content of the file at `path`.
    fn write_file(&self, path: &Path, content: &str) -> StampResult<()>;
}

/// Port for the user-facing side of a generation run.
///
/// Implemented by:
/// - `stamp_cli::prompt::TerminalCollaborator` (interactive terminal)
/// - `stamp_adapters::collaborator::ScriptedCollaborator` (testing)
pub trait Collaborator {
    /// Let the user pick one of `options`. `None` when dismissed.
    fn choose(&self, prompt: &str, options: &[&str]) -> Option<String>;

    /// Ask for free text. `validate` returns the message to show while the
    /// current input is unacceptable. `None` when cancelled.
    fn prompt_text(
        &self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Option<String>;

    /// One-shot error notification.
    fn show_error(&self, message: &str);

    /// One-shot informational notification.
    fn show_info(&self, message: &str);

    /// Present a generated file to the user.
    fn open_document(&self, path: &Path);
}
