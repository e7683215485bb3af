//! # Set Command Implementation
//!
//! Sets an item, adding it or replacing the existing value. The value tokens
//! are parsed into integers, floats, booleans or strings; several tokens make
//! a list.

use anyhow::Result;
use clap::Args;

use crate::cli::Context;

/// Set (add or update) an item in the manifest
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Key of the item
    pub key: String,

    /// Value of the item
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub value: Vec<String>,
}

/// Execute the `set` command.
pub fn execute(args: SetArgs, ctx: &Context) -> Result<()> {
    let mut manifest = ctx.manifest()?;
    manifest.set(&args.key, args.value.as_slice())?;
    if !ctx.brief {
        println!("Set item '{}': {}", args.key, manifest.get(&args.key)?);
    }
    Ok(())
}
