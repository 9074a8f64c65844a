//! Scan findings -- the aggregated result of one scan pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::installation::InstallationRecord;
use crate::catalog::AppName;

/// Installations retained for a single application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppFindings {
    /// Application these installations belong to
    pub app: AppName,
    /// Retained installations, in discovery order
    pub installations: Vec<InstallationRecord>,
}

impl AppFindings {
    /// An entry with no installations yet.
    #[must_use]
    pub const fn empty(app: AppName) -> Self {
        Self {
            app,
            installations: Vec::new(),
        }
    }
}

/// Complete findings of one scan pass over the local host.
///
/// Every known application has an entry, in catalog order, even when
/// nothing was found for it. Populated once per process invocation and
/// immutable afterwards; there is no persistence across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFindings {
    /// Unique node identifier (machine-id or hostname)
    pub node_id: String,
    /// When this scan ran
    pub collected_at: DateTime<Utc>,
    /// Per-application findings, in catalog order
    pub apps: Vec<AppFindings>,
    /// Summary statistics
    pub summary: ScanSummary,
}

impl ScanFindings {
    /// Total installations retained across all applications.
    #[must_use]
    pub fn total_installations(&self) -> usize {
        self.apps.iter().map(|a| a.installations.len()).sum()
    }

    /// True when no installation was retained for any application.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.iter().all(|a| a.installations.is_empty())
    }

    /// Findings entry for one application, if it was in the catalog.
    #[must_use]
    pub fn app(&self, name: AppName) -> Option<&AppFindings> {
        self.apps.iter().find(|a| a.app == name)
    }
}

/// Summary statistics for a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Installations retained across all applications
    pub total_installations: usize,
    /// Applications with at least one retained installation
    pub apps_with_installations: usize,
    /// Config files inventoried
    pub total_configs: usize,
    /// Scripts inventoried
    pub total_scripts: usize,
    /// Integration labels inferred
    pub total_integrations: usize,
    /// Security issues raised
    pub total_security_issues: usize,
}

impl ScanSummary {
    /// Build summary statistics from per-app findings.
    #[must_use]
    pub fn from_apps(apps: &[AppFindings]) -> Self {
        let installs = || apps.iter().flat_map(|a| a.installations.iter());
        Self {
            total_installations: installs().count(),
            apps_with_installations: apps
                .iter()
                .filter(|a| !a.installations.is_empty())
                .count(),
            total_configs: installs().map(|i| i.configs.len()).sum(),
            total_scripts: installs().map(|i| i.scripts.len()).sum(),
            total_integrations: installs().map(|i| i.integrations.len()).sum(),
            total_security_issues: installs().map(|i| i.security_issues.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConfigFileInfo;

    fn record(configs: usize, scripts: usize, issues: usize) -> InstallationRecord {
        InstallationRecord {
            path: "/tmp/app".to_string(),
            configs: (0..configs)
                .map(|i| ConfigFileInfo {
                    file: format!("cfg{i}"),
                    path: format!("/tmp/app/cfg{i}"),
                    size: 1,
                })
                .collect(),
            scripts: (0..scripts).map(|i| format!("/tmp/app/s{i}.py")).collect(),
            integrations: Vec::new(),
            security_issues: (0..issues).map(|i| format!("issue {i}")).collect(),
        }
    }

    #[test]
    fn summary_counts_across_apps() {
        let apps = vec![
            AppFindings {
                app: AppName::OpenClaw,
                installations: vec![record(2, 1, 1), record(1, 0, 0)],
            },
            AppFindings::empty(AppName::Moltbot),
            AppFindings {
                app: AppName::Clawdbot,
                installations: vec![record(1, 3, 2)],
            },
        ];

        let summary = ScanSummary::from_apps(&apps);
        assert_eq!(summary.total_installations, 3);
        assert_eq!(summary.apps_with_installations, 2);
        assert_eq!(summary.total_configs, 4);
        assert_eq!(summary.total_scripts, 4);
        assert_eq!(summary.total_security_issues, 3);
    }

    #[test]
    fn empty_findings_report_empty() {
        let apps = vec![
            AppFindings::empty(AppName::OpenClaw),
            AppFindings::empty(AppName::Moltbot),
        ];
        let summary = ScanSummary::from_apps(&apps);
        assert_eq!(summary.total_installations, 0);
        assert_eq!(summary.apps_with_installations, 0);
    }
}
