//! Command implementations.

pub mod apps;
pub mod config;
pub mod scan;

use crate::output::OutputFormat;

/// Shared context passed to every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Resolved output format (flag, config file, or default)
    pub output_format: OutputFormat,
}
