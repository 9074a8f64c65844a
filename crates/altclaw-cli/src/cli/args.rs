//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Discover and audit local chat-bot installations
///
/// Scans known locations for openclaw, moltbot, and clawdbot,
/// inventories configuration files and scripts, and flags risky
/// findings like loose .env permissions or hardcoded-looking API keys.
#[derive(Parser, Debug)]
#[command(name = "altclaw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the local host for known installations
    Scan(ScanArgs),

    /// List the applications and locations the scanner knows about
    Apps,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Only keep installations that raised at least one security issue
    #[arg(long)]
    pub issues_only: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the config file path
    Path,

    /// Show the current configuration
    Show,

    /// Set the default output format
    SetOutput {
        /// Format to use when --output is not given
        #[arg(value_enum)]
        format: OutputFormat,
    },
}
