//! nodereg - VPN node registrar
//!
//! Registers a VPN node's metadata as an on-chain record.

use anyhow::Result;
use clap::Parser;
use nodereg_cli::cli::args::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap's env fallbacks see the .env values
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "nodereg=debug" } else { "nodereg=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    nodereg_cli::run(cli).await
}
