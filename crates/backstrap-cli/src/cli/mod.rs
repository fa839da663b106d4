//! Command-line surface of `backstrap`.
//!
//! A bare invocation (optionally with `NAME`) scaffolds a project. A word that
//! names a subcommand is always taken as that subcommand, so a project called
//! `list` needs `backstrap -- list`.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Without a subcommand the CLI scaffolds a project; `NAME` is prompted for
/// when omitted.
#[derive(Debug, Parser)]
#[command(
    name    = "backstrap",
    bin_name = "backstrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Backend project skeletons in one command",
    long_about = "Backstrap creates a Node.js backend project layout \
                  (Express, Express + Mongo or Express + SQL) with a \
                  ready-to-install package.json.",
    after_help = "EXAMPLES:\n\
        \x20 backstrap my-api\n\
        \x20 backstrap                      # prompts for the name\n\
        \x20 BACKSTRAP_FRAMEWORK=sql backstrap my-api < /dev/null\n\
        \x20 backstrap list --format json\n\
        \x20 backstrap completions bash > ~/.local/share/bash-completion/completions/backstrap",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the default scaffold action.
    #[command(flatten)]
    pub create: CreateArgs,

    /// Subcommand to execute instead of scaffolding.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available frameworks.
    #[command(
        visible_alias = "ls",
        about = "List available frameworks",
        after_help = "EXAMPLES:\n\
            \x20 backstrap list\n\
            \x20 backstrap list --format csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 backstrap completions bash > ~/.local/share/bash-completion/completions/backstrap\n\
            \x20 backstrap completions zsh  > ~/.zfunc/_backstrap\n\
            \x20 backstrap completions fish > ~/.config/fish/completions/backstrap.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or initialise the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 backstrap config get output.format\n\
            \x20 backstrap config list\n\
            \x20 backstrap config init"
    )]
    Config(ConfigCommands),
}

// ── default action ────────────────────────────────────────────────────────────

/// Arguments for `backstrap [NAME]`.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Name of the project directory created in the current directory.
    #[arg(value_name = "NAME", help = "Project name (prompted for when omitted)")]
    pub name: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `backstrap list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `backstrap completions`.
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

/// Subcommands for `backstrap config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
