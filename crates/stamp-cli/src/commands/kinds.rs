//! Implementation of the `stamp kinds` command.

use serde::Serialize;

use stamp_core::domain::{GeneratorOptions, Kind};

use crate::{
    cli::{KindsArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct KindInfo<'a> {
    kind: &'static str,
    casing: &'static str,
    example: &'static str,
    location: &'a str,
    description: &'static str,
}

fn describe(kind: Kind, options: &GeneratorOptions) -> KindInfo<'_> {
    let casing = kind.casing();
    KindInfo {
        kind: kind.as_str(),
        casing: casing.label(),
        example: casing.example(),
        location: kind.location().unwrap_or(options.component_dir.as_str()),
        description: kind.description(),
    }
}

pub fn execute(args: KindsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let rows: Vec<KindInfo<'_>> = Kind::ALL
        .iter()
        .map(|&kind| describe(kind, &config.generator))
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Available Kinds:")?;
            for row in &rows {
                output.print(&format!(
                    "  {:<10} {:<15} {:<34} {}",
                    row.kind, row.casing, row.location, row.description
                ))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.print(row.kind)?;
            }
        }
        // JSON must stay parseable even in quiet mode.
        ListFormat::Json => output.json(&rows)?,
    }

    Ok(())
}
