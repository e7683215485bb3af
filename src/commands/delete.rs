//! # Delete Command Implementation

use anyhow::Result;
use clap::Args;

use crate::cli::Context;

/// Delete an item from the manifest
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Key of the item
    pub key: String,
}

/// Execute the `delete` command.
pub fn execute(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let mut manifest = ctx.manifest()?;
    manifest.delete(&args.key)?;
    if !ctx.brief {
        println!("Deleted item: {}", args.key);
    }
    Ok(())
}
