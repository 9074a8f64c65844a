//! Recursive script inventory and the hardcoded-secret check.

use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

use super::secrets::looks_like_hardcoded_key;
use crate::error::{AuditError, Result};
use crate::types::InstallationRecord;

/// File extensions treated as scripts.
const SCRIPT_EXTENSIONS: &[&str] = &["py"];

/// Walk the root recursively and record every script found.
///
/// Each script's content is searched for hardcoded-key markers; a file
/// that cannot be read still counts as a script but contributes no
/// content findings.
pub(crate) fn inventory_scripts(root: &Path, record: &mut InstallationRecord) {
    let scripts = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_script(e.path()));

    for entry in scripts {
        let path = entry.path();
        record.scripts.push(path.display().to_string());

        let content = match read_lossy(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read script, skipping content check"
                );
                continue;
            }
        };

        if looks_like_hardcoded_key(&content) {
            let basename = path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            record
                .security_issues
                .push(format!("Potential hardcoded API key in {basename}"));
        }
    }
}

/// True when the path carries a recognized script extension.
fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Read a file as text, replacing undecodable bytes instead of failing.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).map_err(|e| AuditError::io(path.display().to_string(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
