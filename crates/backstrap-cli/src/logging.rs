//! Diagnostics for the `backstrap` binary.
//!
//! The core and adapter crates emit spans and events; this module owns the
//! one subscriber that renders them. Everything goes to stderr, so the
//! success message and `--output-format json` reports on stdout are never
//! interleaved with log lines.
//!
//! `-v` raises the threshold one step per occurrence starting from WARN,
//! `--quiet` pins it to ERROR, and a set `RUST_LOG` replaces both. In JSON
//! output mode events are emitted as JSON objects as well.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Install the global subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let threshold = threshold(args);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter_directives(threshold))?,
    };
    // Targets and spans only help once someone is tracing the workflow.
    let detailed = threshold >= LevelFilter::TRACE;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if args.output_format == OutputFormat::Json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(detailed)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(detailed)
                    .without_time()
                    .with_ansi(!args.no_color && std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

/// Scope the threshold to the workspace crates; dependencies stay quiet.
fn filter_directives(threshold: LevelFilter) -> String {
    ["backstrap", "backstrap_core", "backstrap_adapters"]
        .map(|target| format!("{target}={threshold}"))
        .join(",")
}

fn threshold(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
