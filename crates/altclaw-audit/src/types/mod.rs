//! Core types for the scan result.

pub mod findings;
pub mod installation;

pub use findings::{AppFindings, ScanFindings, ScanSummary};
pub use installation::{ConfigFileInfo, InstallationRecord};
