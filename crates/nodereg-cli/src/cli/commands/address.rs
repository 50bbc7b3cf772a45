//! `nodereg address` - Derive the record address of a node number.

use anyhow::Result;
use colored::Colorize;
use nodereg::derive_node_address;

use super::Context;
use crate::cli::args::AddressArgs;

pub fn execute(ctx: &Context, args: &AddressArgs) -> Result<()> {
    let (address, bump) = derive_node_address(&ctx.program_id, args.node_number);

    let value = serde_json::json!({
        "node_number": args.node_number,
        "address": address.to_string(),
        "bump": bump,
        "program_id": ctx.program_id.to_string(),
    });
    if !ctx.output_format.print_structured(&value)? {
        println!("{} {}", "Address:".bold(), address.to_string().cyan());
        println!("  {} {}", "Node number:".bold(), args.node_number);
        println!("  {} {}", "Bump:".bold(), bump);
        println!("  {} {}", "Program:".bold(), ctx.program_id);
    }

    Ok(())
}
