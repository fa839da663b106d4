//! `backstrap [NAME]`: lay out an Express backend skeleton in `./NAME`.
//!
//! `main` loads `.env`, parses arguments, installs the tracing subscriber,
//! layers configuration, then hands off to [`run`]. Any [`CliError`] is
//! rendered on stderr and mapped to an exit code:
//!
//! | Code | Meaning                                     |
//! |------|---------------------------------------------|
//! |  0   | Project created (or subcommand succeeded)   |
//! |  1   | Target directory already exists, or I/O     |
//! |  2   | Bad input, missing answer, cancelled prompt |
//! |  4   | Configuration file or environment invalid   |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod progress;
mod prompt;

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Also reached for --help / --version, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("backstrap: {e:#}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "arguments parsed"
    );

    let loaded = if reads_config_file(cli.command.as_ref()) {
        AppConfig::load(cli.global.config.as_ref())
    } else {
        Ok(AppConfig::default())
    };
    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, cli.global.verbose > 0);
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// `config init` creates the file and `config path` only names it, so
/// neither may require it to exist.
fn reads_config_file(command: Option<&Commands>) -> bool {
    !matches!(
        command,
        Some(Commands::Config(
            ConfigCommands::Init { .. } | ConfigCommands::Path
        ))
    )
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        None => {
            let no_color = cli.global.no_color || config.output.no_color;
            commands::create::execute(cli.create, no_color, config, output)
        }
        Some(Commands::List(cmd)) => commands::list::execute(cmd, output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
        Some(Commands::Config(cmd)) => {
            commands::config::execute(cmd, config, cli.global.config.as_deref(), output)
        }
    }
}

/// Colour only when stderr is a terminal and `NO_COLOR` is unset.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let colored = std::io::IsTerminal::is_terminal(&std::io::stderr())
        && std::env::var_os("NO_COLOR").is_none();
    let msg = if colored {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
