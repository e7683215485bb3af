//! # Show Command Implementation
//!
//! Prints the manifest contents as YAML. This is also what runs when no
//! subcommand is given.

use anyhow::Result;

use crate::cli::Context;

/// Execute the `show` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let manifest = ctx.manifest()?;
    manifest.show()?;
    Ok(())
}
