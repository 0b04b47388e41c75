//! Implementation of the `stamp generate` command.
//!
//! Responsibility: turn arguments and config into an orchestrator run,
//! then display the outcome. Naming rules and templates live in core.

use tracing::{debug, instrument};

use stamp_adapters::LocalFilesystem;
use stamp_core::application::{GenerateService, Orchestrator};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::{report_outcome, resolve_project},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{TerminalCollaborator, can_prompt},
};

/// Execute the `stamp generate` command.
///
/// 1. Resolve the project root
/// 2. Layer flags over the configured generator options
/// 3. Refuse to run when a question would be needed but nobody can answer
/// 4. Run the orchestrator with command-line answers preset
/// 5. Report produced and skipped files
#[instrument(skip_all, fields(kind = args.kind.as_deref().unwrap_or("?")))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = resolve_project(global.root.as_deref())?;

    let mut options = args.flags.apply(config.generator.clone());
    if let Some(destination) = args.destination {
        options.component_dir = destination;
    }
    debug!(?options, root = %project.root().display(), "Generator options resolved");

    if (args.kind.is_none() || args.name.is_none()) && !can_prompt() {
        return Err(missing_arguments(args.kind.is_none()));
    }

    let editor = if args.flags.open && !args.flags.dry_run {
        config.editor.resolve()
    } else {
        None
    };
    if args.flags.open && !args.flags.dry_run && editor.is_none() {
        output.warning("--open given but no editor configured (editor.command, $VISUAL, $EDITOR)")?;
    }

    let collaborator = TerminalCollaborator::new(&output)
        .with_kind(args.kind)
        .with_name(args.name)
        .with_editor(editor);

    let service = GenerateService::new(Box::new(LocalFilesystem::new()), options);
    let orchestrator = Orchestrator::new(service).with_dry_run(args.flags.dry_run);

    let outcome = orchestrator.run(&collaborator, &project);
    report_outcome(outcome, &output, args.flags.dry_run)
}

fn missing_arguments(kind_missing: bool) -> CliError {
    if !cfg!(feature = "interactive") {
        return CliError::FeatureNotAvailable {
            feature: "interactive",
        };
    }
    let what = if kind_missing { "KIND and NAME" } else { "NAME" };
    CliError::InvalidInput {
        message: format!("{what} must be given when not running in a terminal"),
        source: None,
    }
}
