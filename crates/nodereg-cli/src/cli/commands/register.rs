//! `nodereg register` - Register this node and print the created record.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use nodereg::{
    generate_did, register_node, IpInfoClient, NodeDetails, RegistrationReport,
    DEFAULT_DID_LENGTH, DEFAULT_DID_METHOD,
};
use tracing::{info, warn};

use super::Context;
use crate::cli::args::RegisterArgs;
use crate::output::print_account_pretty;

pub async fn execute(ctx: Context, args: RegisterArgs) -> Result<()> {
    let mut builder = ctx
        .registrar_config()
        .credential_opt(args.private_key.clone())
        .details(args.details());
    if let Some(node_number) = args.node_number {
        builder = builder.node_number(node_number);
    }
    if let Some(secs) = args.confirm_timeout {
        builder = builder.confirmation(ctx.confirmation.timeout(Duration::from_secs(secs)));
    }
    let mut config = builder.build()?;

    // Without a usable credential the run fails before any request, ipinfo included
    if config.keypair().is_ok() {
        if args.generate_did && config.details.identity.is_empty() {
            config.details.identity = generate_did(DEFAULT_DID_METHOD, DEFAULT_DID_LENGTH);
            info!(identity = %config.details.identity, "generated node identity");
        }
        if args.detect {
            detect(&mut config.details).await;
        }

        let missing = config.details.missing_fields();
        if !missing.is_empty() {
            warn!(fields = ?missing, "submitting empty fields");
        }
    }

    let report = register_node(&config).await;

    if !ctx.output_format.print_structured(&report)? {
        print_report_pretty(&report);
    }

    if !report.is_success() {
        std::process::exit(report.exit_code());
    }
    Ok(())
}

/// Fill empty network fields from ipinfo.io; a failed lookup leaves them as is
async fn detect(details: &mut NodeDetails) {
    let lookup = match IpInfoClient::new() {
        Ok(client) => client.lookup().await,
        Err(err) => Err(err),
    };

    match lookup {
        Ok(ip_info) => {
            details.fill_from_ip_info(&ip_info);
            info!(
                ip = %details.ip_address,
                isp = %details.isp_info,
                region = %details.region,
                location = %details.location,
                "detected network details"
            );
        }
        Err(err) => warn!(error = %err, "network detection failed"),
    }
}

fn print_report_pretty(report: &RegistrationReport) {
    match report {
        RegistrationReport::Registered(registration) => {
            println!(
                "{} node {}",
                "Registered".green().bold(),
                registration.node_number.to_string().cyan().bold()
            );
            println!();
            println!("  {} {}", "Signature:".bold(), registration.signature);
            println!("  {} {}", "Address:".bold(), registration.address);
            print_account_pretty(&registration.account);
        }
        RegistrationReport::Failed { kind, message, logs } => {
            println!("{} {} {}", "Error:".red().bold(), format!("[{kind}]").red(), message);
            if !logs.is_empty() {
                println!();
                println!("{}", "Program logs:".bold());
                for line in logs {
                    println!("  {}", line.dimmed());
                }
            }
        }
    }
}
