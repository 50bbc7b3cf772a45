//! `nodereg did` - Generate a random node DID.

use anyhow::Result;
use nodereg::generate_did;

use super::Context;
use crate::cli::args::DidArgs;

pub fn execute(ctx: &Context, args: &DidArgs) -> Result<()> {
    let did = generate_did(&args.method, args.length);

    if !ctx
        .output_format
        .print_structured(&serde_json::json!({ "did": did }))?
    {
        println!("{did}");
    }

    Ok(())
}
