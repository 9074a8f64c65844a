//! Installation analysis -- config inventory, script heuristics, and
//! integration inference for one discovered root.

mod configs;
mod manifest;
mod scripts;
mod secrets;

pub use secrets::looks_like_hardcoded_key;

use std::path::Path;
use tracing::debug;

use crate::catalog::AppSpec;
use crate::types::InstallationRecord;

/// Analyze one discovered root and build its installation record.
///
/// Returns `None` when no expected configuration file exists under the
/// root: stray scripts or a lone manifest never count as an
/// installation. Every step degrades per-file on read failures; nothing
/// here aborts the surrounding scan.
pub async fn analyze_installation(
    spec: &AppSpec,
    root: &Path,
) -> Option<InstallationRecord> {
    let mut record = InstallationRecord::new(root.display().to_string());

    configs::inventory_configs(spec, root, &mut record).await;
    scripts::inventory_scripts(root, &mut record);
    record.integrations = manifest::detect_integrations(root).await;

    if record.configs.is_empty() {
        debug!(
            app = %spec.name,
            root = %root.display(),
            "no expected config file, discarding root"
        );
        return None;
    }

    Some(record)
}
