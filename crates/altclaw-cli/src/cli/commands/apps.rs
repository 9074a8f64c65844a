//! Apps command -- show the known-application catalog.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use altclaw_audit::KNOWN_APPS;

use crate::output::OutputFormat;

use super::Context;

/// Serializable view of one catalog row.
#[derive(Serialize)]
struct AppRow {
    app: &'static str,
    locations: &'static [&'static str],
    config_files: &'static [&'static str],
}

/// Execute the apps command.
pub fn execute(ctx: Context) -> Result<()> {
    if matches!(ctx.output_format, OutputFormat::Json) {
        let rows: Vec<AppRow> = KNOWN_APPS
            .iter()
            .map(|spec| AppRow {
                app: spec.name.id(),
                locations: spec.locations,
                config_files: spec.config_files,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for spec in KNOWN_APPS {
        println!(
            "  {} {}",
            spec.name.id().bright_white().bold(),
            format!("({})", spec.name.title()).dimmed()
        );
        println!(
            "    {}  {}",
            "locations".dimmed(),
            spec.locations.join(", ")
        );
        println!(
            "    {}  {}",
            "configs  ".dimmed(),
            spec.config_files.join(", ")
        );
        println!();
    }

    Ok(())
}
