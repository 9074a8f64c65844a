//! # altclaw-cli
//!
//! Command-line driver for the altclaw audit engine.
//!
//! ## Features
//!
//! - **scan**: discover installations, inventory configs and scripts,
//!   flag risky findings
//! - **apps**: show the catalog of known applications and locations
//! - **config**: manage CLI defaults
//! - **Multiple output formats**: pretty terminal output, JSON, Markdown

pub mod cli;
pub mod config;
pub mod output;
pub mod report;

pub use cli::run;
