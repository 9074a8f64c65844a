//! Config command -- manage CLI defaults.

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

use super::Context;

/// Execute the config command.
pub fn execute(_ctx: Context, args: &ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::SetOutput { format } => {
            let mut config = Config::load()?;
            config.output_format = Some(format);
            config.save()?;
            println!(
                "  {} default output format set to {format}",
                "updated".bright_green()
            );
            Ok(())
        }
    }
}
