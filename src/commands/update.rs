//! # Update Command Implementation
//!
//! Replaces the value of an existing item and reports the old and new
//! values. Fails if the key is not present.

use anyhow::Result;
use clap::Args;

use crate::cli::Context;

/// Update an existing item in the manifest
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Key of the item
    pub key: String,

    /// New value of the item
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub value: Vec<String>,
}

/// Execute the `update` command.
pub fn execute(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut manifest = ctx.manifest()?;
    let old = manifest.get(&args.key)?;
    manifest.update(&args.key, args.value.as_slice())?;
    if !ctx.brief {
        println!(
            "Updated item '{}': {} -> {}",
            args.key,
            old,
            manifest.get(&args.key)?
        );
    }
    Ok(())
}
