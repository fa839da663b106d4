//! Flags shared by the scaffold action and every subcommand.
//!
//! `global = true` lets them appear anywhere on the line:
//! `backstrap -q api` and `backstrap api -q` parse the same.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Show diagnostics on stderr; repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are written to stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of stdout. `Auto` becomes `Human` on a terminal, `Plain` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Colours, spinners and highlighted names
    Human,
    /// The same lines without colour or animation
    Plain,
    /// A single JSON document; progress lines are suppressed
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value. Unknown values fall back to
    /// [`OutputFormat::Auto`].
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "human" => Self::Human,
            "plain" => Self::Plain,
            "json" => Self::Json,
            _ => Self::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_format_values() {
        assert_eq!(OutputFormat::from_config("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config(" Plain "), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_config("human"), OutputFormat::Human);
        assert_eq!(OutputFormat::from_config("bogus"), OutputFormat::Auto);
    }
}
