//! Implementation of the `stamp here` command ("generate component here").

use std::path::Path;

use tracing::{debug, instrument};

use stamp_adapters::LocalFilesystem;
use stamp_core::application::{GenerateService, Orchestrator};

use crate::{
    cli::{GlobalArgs, HereArgs},
    commands::{absolute, report_outcome, resolve_project},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{TerminalCollaborator, can_prompt},
};

/// Execute the `stamp here` command.
///
/// A relative PATH is taken from the current directory. When PATH names a
/// file the component goes next to it.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: HereArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = resolve_project(global.root.as_deref())?;

    let mut selected = absolute(&args.path)?;
    if selected.is_file() {
        if let Some(parent) = selected.parent().map(Path::to_path_buf) {
            selected = parent;
        }
    }
    debug!(selected = %selected.display(), "Selection resolved");

    if args.name.is_none() && !can_prompt() {
        return Err(CliError::InvalidInput {
            message: "NAME must be given when not running in a terminal".into(),
            source: None,
        });
    }

    let editor = if args.flags.open && !args.flags.dry_run {
        config.editor.resolve()
    } else {
        None
    };

    let collaborator = TerminalCollaborator::new(&output)
        .with_name(args.name)
        .with_editor(editor);

    let options = args.flags.apply(config.generator.clone());
    let service = GenerateService::new(Box::new(LocalFilesystem::new()), options);
    let orchestrator = Orchestrator::new(service).with_dry_run(args.flags.dry_run);

    let outcome = orchestrator.run_component_here(&collaborator, &project, &selected);
    report_outcome(outcome, &output, args.flags.dry_run)
}
