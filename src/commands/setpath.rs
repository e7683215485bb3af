//! # Setpath Command Implementation
//!
//! Stores the given file path(s) as a file item, relative to the directory
//! holding the manifest.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::Context;

/// Set a file item using the relative path of the given files
#[derive(Args, Debug)]
pub struct SetpathArgs {
    /// Key of the file item
    pub key: String,

    /// Paths to the files
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,
}

/// Execute the `setpath` command.
pub fn execute(args: SetpathArgs, ctx: &Context) -> Result<()> {
    let mut manifest = ctx.manifest()?;
    manifest.setpath(&args.key, &args.paths)?;
    if !ctx.brief {
        println!("Set file item '{}': {}", args.key, manifest.get(&args.key)?);
    }
    Ok(())
}
