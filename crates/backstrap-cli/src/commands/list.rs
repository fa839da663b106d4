//! Implementation of the `backstrap list` command.

use serde::Serialize;

use backstrap_core::domain::{DependencySet, FrameworkChoice, dependencies_for};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// One row of the framework catalog.
#[derive(Debug, Serialize)]
struct FrameworkEntry {
    id: &'static str,
    label: &'static str,
    dependencies: DependencySet,
}

impl FrameworkEntry {
    fn packages(&self) -> Vec<&str> {
        self.dependencies.packages().collect()
    }
}

fn catalog() -> Vec<FrameworkEntry> {
    FrameworkChoice::ALL
        .iter()
        .map(|choice| FrameworkEntry {
            id: choice.as_str(),
            label: choice.label(),
            dependencies: dependencies_for(*choice),
        })
        .collect()
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let entries = catalog();

    match args.format {
        ListFormat::Table => {
            output.header("Available frameworks:")?;
            for entry in &entries {
                output.print(&format!(
                    "  {:<14} {:<16} {}",
                    entry.id,
                    entry.label,
                    entry.packages().join(", ")
                ))?;
            }
        }

        // JSON bypasses quiet mode: it must stay parseable in pipes.
        ListFormat::Json => output.json(&entries)?,

        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }

        ListFormat::Csv => {
            for line in csv_lines(&entries) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Header plus one row per framework; packages are `;`-separated.
fn csv_lines(entries: &[FrameworkEntry]) -> Vec<String> {
    std::iter::once("id,label,dependencies".to_owned())
        .chain(
            entries
                .iter()
                .map(|e| format!("{},{},{}", e.id, e.label, e.packages().join(";"))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_choice_in_order() {
        let ids: Vec<_> = catalog().iter().map(|e| e.id).collect();
        assert_eq!(ids, ["express", "expressMongo", "expressSQL"]);
    }

    #[test]
    fn json_shape() {
        let value = serde_json::to_value(catalog()).unwrap();
        assert_eq!(value[1]["id"], "expressMongo");
        assert_eq!(value[1]["label"], "Express + Mongo");
        assert_eq!(value[1]["dependencies"]["mongoose"], "latest");
    }

    #[test]
    fn csv_rows() {
        let lines = csv_lines(&catalog());
        assert_eq!(lines[0], "id,label,dependencies");
        assert_eq!(lines[3], "expressSQL,Express + SQL,express;sequelize");
        assert_eq!(lines.len(), 4);
    }
}
