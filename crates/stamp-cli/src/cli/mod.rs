//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stamp_core::domain::GeneratorOptions;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stamp",
    bin_name = "stamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate React/Redux modules from templates",
    long_about = "Stamp writes the conventional set of files for an asset, \
                  component, duck, service, view or report into your project.",
    after_help = "EXAMPLES:\n\
        \x20 stamp generate duck userProfile\n\
        \x20 stamp generate component Widget --destination src/features/cart --spec\n\
        \x20 stamp here src/features/cart Widget\n\
        \x20 stamp check view dashboard\n\
        \x20 stamp completions bash > /usr/share/bash-completion/completions/stamp",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a module; missing kind or name are asked for.
    #[command(
        visible_alias = "g",
        about = "Generate a module",
        after_help = "EXAMPLES:\n\
            \x20 stamp generate                       # pick kind and name interactively\n\
            \x20 stamp generate duck cart\n\
            \x20 stamp generate report sales --dry-run\n\
            \x20 stamp generate view Dashboard --open"
    )]
    Generate(GenerateArgs),

    /// Generate a component inside a chosen directory.
    #[command(
        about = "Generate a component in a directory",
        after_help = "EXAMPLES:\n\
            \x20 stamp here src/features/cart Widget\n\
            \x20 stamp here src/features/cart/index.tsx   # uses the file's directory"
    )]
    Here(HereArgs),

    /// List the kinds that can be generated.
    #[command(
        visible_alias = "ls",
        about = "List generatable kinds",
        after_help = "EXAMPLES:\n\
            \x20 stamp kinds\n\
            \x20 stamp kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Validate a name without generating anything.
    #[command(
        about = "Check a name against the naming rules",
        after_help = "EXAMPLES:\n\
            \x20 stamp check component Button\n\
            \x20 stamp check duck userProfile"
    )]
    Check(CheckArgs),

    /// Initialise a Stamp configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stamp init           # user config location\n\
            \x20 stamp init --local   # .stamp.toml in the project root"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stamp completions bash > ~/.local/share/bash-completion/completions/stamp\n\
            \x20 stamp completions zsh  > ~/.zfunc/_stamp\n\
            \x20 stamp completions fish > ~/.config/fish/completions/stamp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stamp configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stamp config get generator.component_dir\n\
            \x20 stamp config list\n\
            \x20 stamp config path"
    )]
    Config(ConfigCommands),
}

// ── generation flags ──────────────────────────────────────────────────────────

/// Switches shared by `generate` and `here`.
#[derive(Debug, Args, Default)]
pub struct GenerationFlags {
    /// Also write a test spec.
    #[arg(long = "spec", help = "Also write a test spec")]
    pub spec: bool,

    /// Also write a story (components).
    #[arg(long = "story", help = "Also write a story file (components)")]
    pub story: bool,

    /// Skip the `index.tsx` re-export (components).
    #[arg(long = "no-index", help = "Do not write index.tsx (components)")]
    pub no_index: bool,

    /// Open every generated file in the configured editor.
    #[arg(long = "open", help = "Open generated files in the editor")]
    pub open: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl GenerationFlags {
    /// Layer the flags over configured options. Flags only ever switch
    /// things on, except `--no-index`.
    pub fn apply(&self, mut options: GeneratorOptions) -> GeneratorOptions {
        options.include_spec |= self.spec;
        options.include_story |= self.story;
        if self.no_index {
            options.include_index = false;
        }
        options
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stamp generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// asset, component, duck, report, service or view.
    #[arg(value_name = "KIND", help = "What to generate (see `stamp kinds`)")]
    pub kind: Option<String>,

    /// Identifier; casing depends on the kind.
    #[arg(value_name = "NAME", help = "Name of the module")]
    pub name: Option<String>,

    /// Directory for components, relative to the project root.
    #[arg(
        short = 'd',
        long = "destination",
        value_name = "DIR",
        help = "Component directory (default: generator.component_dir)"
    )]
    pub destination: Option<String>,

    #[command(flatten)]
    pub flags: GenerationFlags,
}

// ── here ──────────────────────────────────────────────────────────────────────

/// Arguments for `stamp here`.
#[derive(Debug, Args)]
pub struct HereArgs {
    /// Directory (or a file inside it) within the project.
    #[arg(value_name = "PATH", help = "Directory to generate into")]
    pub path: PathBuf,

    /// Component name (UpperCamelCase).
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: Option<String>,

    #[command(flatten)]
    pub flags: GenerationFlags,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `stamp kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `stamp check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(value_name = "KIND", help = "Kind whose naming rule applies")]
    pub kind: String,

    #[arg(value_name = "NAME", help = "Name to check")]
    pub name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stamp init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stamp.toml` in the project root.
    #[arg(
        long = "local",
        help = "Create .stamp.toml in the project root"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stamp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stamp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.include_spec`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
