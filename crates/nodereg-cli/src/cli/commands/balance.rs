//! `nodereg balance` - Show the balance of the signer or another account.

use anyhow::Result;
use colored::Colorize;
use nodereg::solana_sdk::pubkey::Pubkey;
use nodereg::solana_sdk::signature::Signer;
use nodereg::{lamports_to_sol, Ledger};

use super::Context;
use crate::cli::args::BalanceArgs;

pub async fn execute(ctx: Context, args: BalanceArgs) -> Result<()> {
    let pubkey: Pubkey = match args.address {
        Some(address) => address
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid address {address}: {e}"))?,
        None => ctx
            .registrar_config()
            .credential_opt(args.private_key)
            .build()?
            .keypair()?
            .pubkey(),
    };

    let lamports = ctx.ledger().balance(&pubkey).await?;
    let sol = lamports_to_sol(lamports);

    let value = serde_json::json!({
        "address": pubkey.to_string(),
        "lamports": lamports,
        "sol": sol,
    });
    if !ctx.output_format.print_structured(&value)? {
        println!("{} {}", "Account:".bold(), pubkey.to_string().cyan());
        println!("  {} {} SOL ({} lamports)", "Balance:".bold(), sol, lamports);
    }

    Ok(())
}
