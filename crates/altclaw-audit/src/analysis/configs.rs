//! Expected-config inventory and the `.env` permission check.

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tracing::warn;

use crate::catalog::AppSpec;
use crate::error::{AuditError, Result};
use crate::types::{ConfigFileInfo, InstallationRecord};

/// The one config file whose permission bits are checked.
const ENV_FILE: &str = ".env";

/// Mode bits (low nine) an `.env` file must carry exactly.
const ENV_REQUIRED_MODE: u32 = 0o600;

/// Inventory every expected config file that exists under the root.
///
/// Size comes from a metadata query; contents are never read. A
/// metadata failure after the existence check (narrow race) skips the
/// entry with a warning instead of failing the analysis.
pub(crate) async fn inventory_configs(
    spec: &AppSpec,
    root: &Path,
    record: &mut InstallationRecord,
) {
    for &file in spec.config_files {
        let path = root.join(file);
        if !path.exists() {
            continue;
        }

        match stat_config(file, &path).await {
            Ok((info, mode)) => {
                record.configs.push(info);
                if file == ENV_FILE && mode & 0o777 != ENV_REQUIRED_MODE {
                    record
                        .security_issues
                        .push(format!("{file} has overly permissive permissions"));
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping config file");
            }
        }
    }
}

/// Read size and mode for a config file that was just confirmed to exist.
async fn stat_config(file: &str, path: &Path) -> Result<(ConfigFileInfo, u32)> {
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| AuditError::io(path.display().to_string(), e))?;

    let info = ConfigFileInfo {
        file: file.to_string(),
        path: path.display().to_string(),
        size: meta.len(),
    };

    Ok((info, meta.permissions().mode()))
}
