//! Scan command implementation -- discovery, analysis, rendering.

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use altclaw_audit::{collect_findings, ScanFindings, ScanSummary, KNOWN_APPS};

use crate::cli::args::ScanArgs;
use crate::output::OutputFormat;
use crate::report;

use super::Context;

/// Execute the scan command.
pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    if matches!(ctx.output_format, OutputFormat::Pretty) {
        println!(
            "{}",
            format!("  Scanning for {} installations...", known_app_ids()).bright_cyan()
        );
        println!();
    }

    let mut findings = collect_findings().await;
    debug!(
        installations = findings.summary.total_installations,
        issues = findings.summary.total_security_issues,
        "scan complete"
    );

    // Driver-level filter; the engine itself keeps everything retained
    if args.issues_only {
        for app in &mut findings.apps {
            app.installations.retain(|i| !i.security_issues.is_empty());
        }
        findings.summary = ScanSummary::from_apps(&findings.apps);
    }

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&findings)?),
        OutputFormat::Markdown => println!("{}", report::render_markdown(&findings)),
        OutputFormat::Pretty => print_pretty(&findings),
    }

    Ok(())
}

/// Slash-joined ids of every catalog application.
fn known_app_ids() -> String {
    KNOWN_APPS
        .iter()
        .map(|spec| spec.name.id())
        .collect::<Vec<_>>()
        .join("/")
}

/// Colored terminal rendering of the findings.
fn print_pretty(findings: &ScanFindings) {
    if findings.is_empty() {
        println!(
            "  {}",
            format!("No {} installations found.", known_app_ids()).dimmed()
        );
        println!();
        return;
    }

    println!(
        "  {} installation(s) found on {}",
        findings
            .summary
            .total_installations
            .to_string()
            .bright_white(),
        findings.node_id.dimmed()
    );
    println!();

    for app in &findings.apps {
        if app.installations.is_empty() {
            continue;
        }

        println!("  {}", app.app.title().bright_cyan().bold());

        for install in &app.installations {
            println!("    {}", install.path.bright_white());

            for cfg in &install.configs {
                println!(
                    "      {}  {} {}",
                    "config".dimmed(),
                    cfg.file,
                    format_size(cfg.size).dimmed()
                );
            }

            if !install.scripts.is_empty() {
                println!(
                    "      {}  {} file(s)",
                    "scripts".dimmed(),
                    install.scripts.len().to_string().bright_white()
                );
            }

            if !install.integrations.is_empty() {
                println!(
                    "      {}  {}",
                    "integrations".dimmed(),
                    install.integrations.join(", ").bright_yellow()
                );
            }

            for issue in &install.security_issues {
                println!("      {}  {}", "issue".bright_red(), issue.bright_red());
            }

            println!();
        }
    }
}

/// Format file size for display.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1}M", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.0}K", bytes as f64 / 1024.0)
    } else {
        format!("{bytes}B")
    }
}
