//! `nodereg show` - Fetch the record of a node number.

use anyhow::Result;
use colored::Colorize;
use nodereg::{derive_node_address, Ledger, RegistrarError, VpnNodeAccount};

use super::Context;
use crate::cli::args::ShowArgs;
use crate::output::print_account_pretty;

pub async fn execute(ctx: Context, args: ShowArgs) -> Result<()> {
    let (address, _) = derive_node_address(&ctx.program_id, args.node_number);

    let data = ctx
        .ledger()
        .account_data(&address)
        .await?
        .ok_or_else(|| RegistrarError::AccountNotFound {
            address: address.to_string(),
        })?;
    let account = VpnNodeAccount::try_from_account_data(&data)?;

    let value = serde_json::json!({
        "node_number": args.node_number,
        "address": address.to_string(),
        "account": account,
    });
    if !ctx.output_format.print_structured(&value)? {
        println!("{} {}", "Node:".bold(), address.to_string().cyan().bold());
        println!();
        print_account_pretty(&account);
    }

    Ok(())
}
