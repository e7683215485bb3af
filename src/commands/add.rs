//! # Add Command Implementation
//!
//! Adds a new item. Fails without touching the manifest if the key is
//! already present.

use anyhow::Result;
use clap::Args;

use crate::cli::Context;

/// Add a new item to the manifest
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Key of the item
    pub key: String,

    /// Value of the item
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub value: Vec<String>,
}

/// Execute the `add` command.
pub fn execute(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut manifest = ctx.manifest()?;
    manifest.add(&args.key, args.value.as_slice())?;
    if !ctx.brief {
        println!("Added item '{}': {}", args.key, manifest.get(&args.key)?);
    }
    Ok(())
}
