use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// The project generation happens in.
///
/// Invariant: `name` is the last non-empty segment of `root`, with either
/// separator style accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    name: String,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        let normalized = to_forward_slashes(&root);
        let name = normalized
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && !segment.ends_with(':'))
            .ok_or_else(|| DomainError::InvalidProjectRoot(root.display().to_string()))?
            .to_string();

        Ok(Self { root, name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name of the project root, used as the action-type namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute location of a project-relative path.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// A project-relative directory a component is placed under.
///
/// Stored normalised: forward slashes, no leading or trailing separator,
/// no `.` segments. The empty destination is the project root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Destination(String);

impl Destination {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.replace('\\', "/");
        let mut segments = Vec::new();
        for segment in normalized.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(DomainError::InvalidDestination {
                        path: raw.to_string(),
                        reason: "parent directory segments are not allowed".into(),
                    });
                }
                s if s.ends_with(':') => {
                    return Err(DomainError::InvalidDestination {
                        path: raw.to_string(),
                        reason: "drive prefixes are not allowed".into(),
                    });
                }
                s => segments.push(s),
            }
        }
        Ok(Self(segments.join("/")))
    }

    /// The project root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Destination of a directory picked somewhere inside the project.
    ///
    /// The project root prefix is stripped and separators normalised; the
    /// selection has to lie inside the root.
    pub fn from_selection(project: &ProjectContext, selected: &Path) -> Result<Self, DomainError> {
        let root = to_forward_slashes(project.root());
        let root = root.trim_end_matches('/');
        let selected_str = to_forward_slashes(selected);
        let selected_str = selected_str.trim_end_matches('/');

        if selected_str == root {
            return Ok(Self::root());
        }

        match selected_str.strip_prefix(root) {
            Some(rest) if rest.starts_with('/') => Self::new(rest),
            _ => Err(DomainError::OutsideProject {
                path: selected.display().to_string(),
                root: project.root().display().to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Native relative path for joining onto the project root.
    pub fn to_path_buf(&self) -> PathBuf {
        self.0.split('/').filter(|s| !s.is_empty()).collect()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
