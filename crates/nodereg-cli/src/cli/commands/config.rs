//! `nodereg config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    if ctx.output_format.print_structured(&config)? {
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();
    println!("{}", "Current Configuration:".bold());
    println!();
    println!("  {} {}", "endpoint:".bold(), config.endpoint.clone().unwrap_or_else(unset));
    println!("  {} {}", "program_id:".bold(), config.program_id.clone().unwrap_or_else(unset));
    println!("  {} {}", "commitment:".bold(), config.commitment.clone().unwrap_or_else(unset));
    println!(
        "  {} {}",
        "confirm_timeout_secs:".bold(),
        config
            .confirm_timeout_secs
            .map_or_else(unset, |secs| secs.to_string())
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or_default()
    );

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
