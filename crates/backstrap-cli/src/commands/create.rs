//! Implementation of the default action, `backstrap [NAME]`.
//!
//! Responsibility: wire the adapters into `InitService`, run it in the
//! current directory and display the result. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use backstrap_adapters::LocalFilesystem;
use backstrap_core::application::{InitService, ScaffoldReport};

use crate::{
    cli::{CreateArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    progress::SpinnerProgress,
    prompt::build_prompter,
};

/// Execute the scaffold workflow.
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: CreateArgs,
    no_color: bool,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let working_dir =
        std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;

    let report = scaffold(args.name, &working_dir, no_color, &config, &output)?;
    info!(
        root = %report.project_root.display(),
        directories = report.directories_created,
        files = report.files_created,
        "Project scaffolded"
    );

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    } else {
        print_success(&report, &output)?;
    }
    Ok(())
}

fn scaffold(
    name: Option<String>,
    working_dir: &Path,
    no_color: bool,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ScaffoldReport> {
    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        build_prompter(config, no_color),
        Box::new(SpinnerProgress::for_output(output)),
    );
    Ok(service.run(name, working_dir)?)
}

/// Success line plus the advisory next steps. Nothing here is executed.
fn print_success(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success(&format!(
        "Project structure for '{}' created successfully!",
        output.highlight(&report.project_name)
    ))?;
    if report.files_skipped > 0 {
        output.warning(&format!(
            "{} existing file(s) were left untouched",
            report.files_skipped
        ))?;
    }
    output.print("")?;
    output.print("Next steps:")?;
    for step in next_steps(&report.project_name) {
        output.print(&format!("  {step}"))?;
    }
    Ok(())
}

fn next_steps(project_name: &str) -> [String; 2] {
    [format!("cd {project_name}"), "npm install".to_owned()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_steps_are_cd_then_install() {
        assert_eq!(next_steps("demo-api"), ["cd demo-api", "npm install"]);
    }
}
