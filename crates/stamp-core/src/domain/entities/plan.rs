//! Generation plan and result.
//!
//! A [`GenerationPlan`] is what a template generator produces: every file it
//! wants, in order, with final content. It is pure data; nothing touches the
//! filesystem until the plan is handed to the generate service.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{FileRole, Identifier, Kind};

/// One file of a plan. `path` is relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub role: FileRole,
    pub path: PathBuf,
    pub content: String,
}

impl PlannedFile {
    pub fn new(role: FileRole, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            role,
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Everything one generator invocation wants written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub kind: Kind,
    pub identifier: Identifier,
    /// Directory holding the files, relative to the project root.
    pub base_dir: PathBuf,
    pub files: Vec<PlannedFile>,
    pub advisory: Option<String>,
}

impl GenerationPlan {
    pub fn new(kind: Kind, identifier: Identifier, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            identifier,
            base_dir: base_dir.into(),
            files: Vec::new(),
            advisory: kind.advisory().map(str::to_string),
        }
    }

    /// Add a file named `file_name` inside the plan's base directory.
    pub fn with_file(
        mut self,
        role: FileRole,
        file_name: impl AsRef<Path>,
        content: impl Into<String>,
    ) -> Self {
        let path = self.base_dir.join(file_name);
        self.files.push(PlannedFile::new(role, path, content));
        self
    }

    pub fn file(&self, role: FileRole) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.role == role)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Duplicate paths would make the second write a silent skip.
    pub fn has_duplicate_paths(&self) -> bool {
        let mut seen = HashSet::new();
        !self.files.iter().all(|f| seen.insert(&f.path))
    }
}

/// What an invocation did, handed back to the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Files created by this run, absolute, in plan order.
    pub produced_files: Vec<PathBuf>,
    /// Planned files that already existed and were left untouched.
    pub skipped_files: Vec<PathBuf>,
    pub advisory_message: Option<String>,
}

impl GenerationResult {
    /// The result of a no-op dispatch.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.produced_files.is_empty() && self.skipped_files.is_empty()
    }
}
