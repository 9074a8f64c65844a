//! # altclaw-audit
//!
//! Local-host discovery and audit of known chat-bot installations.
//!
//! Scans a fixed catalog of candidate directories for openclaw, moltbot,
//! and clawdbot installations, inventories configuration files and
//! scripts, infers third-party integrations from the dependency
//! manifest, and raises heuristic security findings (loose `.env`
//! permissions, hardcoded-looking API keys). Strictly read-only: nothing
//! found is modified, parsed structurally, or sent anywhere.
//!
//! ## Data Flow
//!
//! ```text
//! Phase 1: Locate (existence checks only, no file contents)
//!   find_candidate_roots(KNOWN_APPS)
//!   -> (AppSpec, expanded root path) per hit
//!
//! Phase 2: Analyze (once per discovered root)
//!   analyze_installation() -- config inventory + permission check,
//!   recursive script walk + secret heuristic, integration inference
//!   -> InstallationRecord, retained only when a config file exists
//!
//! Phase 3: Aggregate
//!   per-app record lists in catalog order -> ScanFindings
//! ```
//!
//! The scan is best-effort throughout: a path that cannot be read
//! contributes nothing and is logged, and no failure aborts the pass.

pub mod analysis;
pub mod catalog;
pub mod discovery;
pub mod error;
pub mod types;

pub use catalog::{AppName, AppSpec, KNOWN_APPS};
pub use error::{AuditError, Result};
pub use types::*;

use chrono::Utc;

/// Scan the local host for every application in the built-in catalog.
pub async fn collect_findings() -> ScanFindings {
    collect_findings_with(catalog::KNOWN_APPS).await
}

/// Scan using a caller-provided catalog.
///
/// The result always carries one entry per catalog row, in catalog
/// order, empty when nothing was retained for that application.
/// Per-file failures degrade with a logged warning; the scan always
/// completes with whatever it could read.
pub async fn collect_findings_with(catalog: &[AppSpec]) -> ScanFindings {
    let mut apps: Vec<AppFindings> = catalog
        .iter()
        .map(|spec| AppFindings::empty(spec.name))
        .collect();

    for (spec, root) in discovery::find_candidate_roots(catalog) {
        let Some(record) = analysis::analyze_installation(spec, &root).await else {
            continue;
        };
        if let Some(entry) = apps.iter_mut().find(|a| a.app == spec.name) {
            entry.installations.push(record);
        }
    }

    let summary = ScanSummary::from_apps(&apps);

    ScanFindings {
        node_id: node_id(),
        collected_at: Utc::now(),
        apps,
        summary,
    }
}

/// Get a stable node identifier.
///
/// Tries `/etc/machine-id` first, then hostname.
fn node_id() -> String {
    if let Ok(id) = std::fs::read_to_string("/etc/machine-id") {
        let trimmed = id.trim().to_string();
        if !trimmed.is_empty() {
            return trimmed;
        }
    }

    hostname::get().map_or_else(
        |_| "unknown".to_string(),
        |h| h.to_string_lossy().into_owned(),
    )
}
