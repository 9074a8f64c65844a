//! Markdown report rendering.

use altclaw_audit::ScanFindings;

/// Render the prose scan report.
///
/// One section per application with at least one installation; empty
/// scans get an explicit "nothing found" line instead of an empty
/// document.
#[must_use]
pub fn render_markdown(findings: &ScanFindings) -> String {
    let mut report = vec!["# AltClaw Scan Results".to_string(), String::new()];

    let total = findings.total_installations();
    if total == 0 {
        let names = findings
            .apps
            .iter()
            .map(|a| a.app.title())
            .collect::<Vec<_>>()
            .join("/");
        report.push(format!("No {names} installations found."));
        report.push(String::new());
        return report.join("\n");
    }

    report.push(format!("Found {total} installation(s)"));

    for app in &findings.apps {
        if app.installations.is_empty() {
            continue;
        }

        report.push(String::new());
        report.push(format!("## {}", app.app.title()));

        for install in &app.installations {
            report.push(String::new());
            report.push(format!("### Installation at {}", install.path));
            report.push(String::new());

            if !install.configs.is_empty() {
                report.push("**Configuration Files:**".to_string());
                for cfg in &install.configs {
                    report.push(format!("- {} ({} bytes)", cfg.file, cfg.size));
                }
                report.push(String::new());
            }

            if !install.scripts.is_empty() {
                report.push(format!(
                    "**Scripts:** {} file(s) found",
                    install.scripts.len()
                ));
                report.push(String::new());
            }

            if !install.integrations.is_empty() {
                report.push("**Integrations:**".to_string());
                for label in &install.integrations {
                    report.push(format!("- {label}"));
                }
                report.push(String::new());
            }

            if !install.security_issues.is_empty() {
                report.push("**Security Issues:**".to_string());
                for issue in &install.security_issues {
                    report.push(format!("- {issue}"));
                }
                report.push(String::new());
            }
        }
    }

    report.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use altclaw_audit::{
        AppFindings, AppName, ConfigFileInfo, InstallationRecord, ScanSummary,
    };
    use chrono::Utc;

    fn findings_with(apps: Vec<AppFindings>) -> ScanFindings {
        let summary = ScanSummary::from_apps(&apps);
        ScanFindings {
            node_id: "test-node".to_string(),
            collected_at: Utc::now(),
            apps,
            summary,
        }
    }

    fn sample_record() -> InstallationRecord {
        InstallationRecord {
            path: "/home/user/.clawdbot".to_string(),
            configs: vec![ConfigFileInfo {
                file: "config.toml".to_string(),
                path: "/home/user/.clawdbot/config.toml".to_string(),
                size: 10,
            }],
            scripts: vec!["/home/user/.clawdbot/run.py".to_string()],
            integrations: vec!["Slack".to_string()],
            security_issues: vec!["Potential hardcoded API key in run.py".to_string()],
        }
    }

    #[test]
    fn empty_scan_reports_nothing_found() {
        let findings = findings_with(vec![
            AppFindings::empty(AppName::OpenClaw),
            AppFindings::empty(AppName::Moltbot),
            AppFindings::empty(AppName::Clawdbot),
        ]);

        let report = render_markdown(&findings);
        assert!(report.contains("No OpenClaw/Moltbot/Clawdbot installations found."));
        assert!(!report.contains("## "));
    }

    #[test]
    fn populated_scan_lists_every_section() {
        let findings = findings_with(vec![
            AppFindings::empty(AppName::OpenClaw),
            AppFindings::empty(AppName::Moltbot),
            AppFindings {
                app: AppName::Clawdbot,
                installations: vec![sample_record()],
            },
        ]);

        let report = render_markdown(&findings);
        assert!(report.contains("Found 1 installation(s)"));
        assert!(report.contains("## Clawdbot"));
        assert!(report.contains("### Installation at /home/user/.clawdbot"));
        assert!(report.contains("- config.toml (10 bytes)"));
        assert!(report.contains("**Scripts:** 1 file(s) found"));
        assert!(report.contains("- Slack"));
        assert!(report.contains("- Potential hardcoded API key in run.py"));
    }

    #[test]
    fn apps_without_installations_get_no_section() {
        let findings = findings_with(vec![
            AppFindings {
                app: AppName::OpenClaw,
                installations: vec![sample_record()],
            },
            AppFindings::empty(AppName::Moltbot),
        ]);

        let report = render_markdown(&findings);
        assert!(report.contains("## OpenClaw"));
        assert!(!report.contains("## Moltbot"));
    }
}
