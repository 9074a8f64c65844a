//! Installation record types.

use serde::{Deserialize, Serialize};

/// A configuration file found inside an installation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFileInfo {
    /// File name as listed in the catalog
    pub file: String,
    /// Absolute path on disk
    pub path: String,
    /// Size in bytes (metadata query, contents never parsed)
    pub size: u64,
}

/// Everything recorded about one discovered installation.
///
/// A record is only surfaced when `configs` is non-empty -- a directory
/// holding nothing but stray scripts or a manifest is not an
/// installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationRecord {
    /// Absolute installation root
    pub path: String,
    /// Expected config files that exist under the root, in catalog order
    pub configs: Vec<ConfigFileInfo>,
    /// Absolute path of every recognized script under the root
    pub scripts: Vec<String>,
    /// Integration labels inferred from the dependency manifest
    pub integrations: Vec<String>,
    /// Free-text security findings
    pub security_issues: Vec<String>,
}

impl InstallationRecord {
    /// Start an empty record for a root.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            configs: Vec::new(),
            scripts: Vec::new(),
            integrations: Vec::new(),
            security_issues: Vec::new(),
        }
    }
}
