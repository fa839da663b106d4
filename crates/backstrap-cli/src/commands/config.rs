//! `backstrap config`: inspect and initialise configuration.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` override, if any.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.result(&value)?;
        }

        ConfigCommands::List if output.format() == OutputFormat::Json => output.json(&config)?,

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.result(serialise(&config)?.trim_end())?;
        }

        ConfigCommands::Path => {
            output.result(&AppConfig::active_path(config_file).display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::active_path(config_file);
            write_default_config(&path, force)?;
            output.success(&format!("Configuration written to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::InvalidInput {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            AppConfig::KEYS.join(", ")
        ),
        source: None,
    })
}

fn serialise(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the built-in defaults to `path`, creating parent directories.
fn write_default_config(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigError {
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
            source: None,
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let text = serialise(&AppConfig::default())?;
    fs::write(path, text).with_cli_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "default configuration written");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
