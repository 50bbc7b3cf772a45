//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use nodereg::{ConfirmationConfig, DEFAULT_ENDPOINT, PROGRAM_ID};

use crate::config::{parse_program_id, Config};

/// Run the CLI application.
pub async fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Flags and env take precedence over the config file
    let output_format = cli.output.or(config.output_format).unwrap_or_default();
    let endpoint = cli
        .endpoint
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let program_id = match cli.program_id.or_else(|| config.program_id.clone()) {
        Some(id) => parse_program_id(&id)?,
        None => PROGRAM_ID,
    };

    let mut confirmation = ConfirmationConfig::default();
    if let Some(timeout) = config.confirm_timeout() {
        confirmation = confirmation.timeout(timeout);
    }

    // Create context for commands
    let ctx = commands::Context {
        endpoint,
        program_id,
        commitment: config.commitment()?,
        confirmation,
        output_format,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Register(args) => commands::register::execute(ctx, args).await,
        Commands::Show(args) => commands::show::execute(ctx, args).await,
        Commands::Address(args) => commands::address::execute(&ctx, &args),
        Commands::Balance(args) => commands::balance::execute(ctx, args).await,
        Commands::Did(args) => commands::did::execute(&ctx, &args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}
