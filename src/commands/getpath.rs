//! # Getpath Command Implementation
//!
//! Prints the path(s) of a file item, joined onto the manifest directory.

use anyhow::Result;
use clap::Args;

use crate::cli::Context;

/// Get the path to a file item from the manifest
#[derive(Args, Debug)]
pub struct GetpathArgs {
    /// Key of the file item
    pub key: String,

    /// Print paths relative to the current working directory instead of
    /// absolute paths
    #[arg(short, long)]
    pub relative: bool,

    /// Separator to join multiple paths
    #[arg(short, long, value_name = "SEP", default_value = " ")]
    pub separator: String,
}

/// Execute the `getpath` command.
pub fn execute(args: GetpathArgs, ctx: &Context) -> Result<()> {
    let manifest = ctx.manifest()?;
    let path = manifest.getpath(&args.key, args.relative, Some(&args.separator))?;
    if ctx.brief {
        println!("{}", path);
    } else {
        println!("{}: {}", args.key, path);
    }
    Ok(())
}
