//! Implementation of the `stamp check` command.

use serde::Serialize;

use stamp_core::domain::{DomainError, Kind, naming};

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult, ErrorCategory},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    kind: &'a str,
    name: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Run the name validator only. Exit code 2 when the name is rejected.
pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let kind: Kind = args
        .kind
        .parse()
        .map_err(|e: DomainError| CliError::Core(e.into()))?;

    let verdict = naming::check(kind, &args.name);

    if output.is_json() {
        output.json(&CheckReport {
            kind: kind.as_str(),
            name: &args.name,
            valid: verdict.is_ok(),
            reason: verdict.err().map(|r| r.to_string()),
        })?;
        return match verdict {
            Ok(()) => Ok(()),
            Err(_) => Err(CliError::Reported {
                category: ErrorCategory::UserError,
            }),
        };
    }

    match verdict {
        Ok(()) => {
            output.success(&format!("'{}' is a valid {kind} name", args.name))?;
            Ok(())
        }
        Err(reason) => Err(CliError::InvalidName {
            name: args.name,
            kind,
            reason: reason.to_string(),
        }),
    }
}
