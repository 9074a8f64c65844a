//! Error types for the audit engine.

use thiserror::Error;

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors raised while inspecting an installation.
///
/// The scan itself never aborts on these; call sites log and skip the
/// affected file (partial results over no results).
#[derive(Debug, Error)]
pub enum AuditError {
    /// Filesystem metadata or content read failed
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation touched
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Build an `Io` error for a path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
