//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod here;
pub mod init;
pub mod kinds;

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use stamp_core::{
    application::{AbortReason, Outcome},
    domain::{GenerationResult, ProjectContext},
};

use crate::{
    error::{CliError, CliResult, ErrorCategory, IntoCli},
    output::OutputManager,
};

/// The project root from `--root` / `STAMP_ROOT`, else the current directory.
pub fn resolve_project(root: Option<&Path>) -> CliResult<ProjectContext> {
    let root = match root {
        Some(root) => absolute(root)?,
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory")?,
    };
    if !root.is_dir() {
        return Err(CliError::ProjectNotFound { path: root });
    }
    ProjectContext::new(root).map_err(|e| CliError::Core(e.into()))
}

/// Absolute form of `path` with `.` and `..` folded away.
///
/// Folding is lexical, so the path does not have to exist.
pub fn absolute(path: &Path) -> CliResult<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_cli_context(|| format!("Failed to resolve path '{}'", path.display()))?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Render an orchestrator outcome.
///
/// Cancellation is a silent success. Aborts the orchestrator already showed
/// to the user come back as [`CliError::Reported`].
pub fn report_outcome(outcome: Outcome, output: &OutputManager, dry_run: bool) -> CliResult<()> {
    match outcome {
        Outcome::Done(result) => report_result(&result, output, dry_run),
        Outcome::Aborted(AbortReason::Cancelled(stage)) => {
            debug!(stage = %stage, "Cancelled");
            Ok(())
        }
        Outcome::Aborted(AbortReason::InvalidName(_)) => Err(CliError::Reported {
            category: ErrorCategory::UserError,
        }),
        Outcome::Aborted(AbortReason::Failed(error)) => Err(CliError::Reported {
            category: error.category().into(),
        }),
    }
}

fn report_result(result: &GenerationResult, output: &OutputManager, dry_run: bool) -> CliResult<()> {
    if output.is_json() {
        output.json(result)?;
        return Ok(());
    }

    if result.is_empty() {
        output.warning("Nothing to generate")?;
        return Ok(());
    }

    let verb = if dry_run { "Would create" } else { "Created" };
    for path in &result.produced_files {
        output.success(&format!("{verb} {}", path.display()))?;
    }
    for path in &result.skipped_files {
        output.warning(&format!("Skipped {} (already exists)", path.display()))?;
    }
    if dry_run {
        if let Some(message) = &result.advisory_message {
            output.info(message)?;
        }
    }
    Ok(())
}
