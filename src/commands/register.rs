//! # Register Command Implementation
//!
//! Updates the manifest with generated products:
//!
//! - `--create` creates an empty manifest when none can be found;
//! - `--add-directory` records the manifest directory as item `directory`;
//! - `--repro DIR` registers the reprocessed products found in `DIR`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use log::info;

use acis_manifest::error::Error;
use acis_manifest::manifest::Manifest;
use acis_manifest::register::{register_directory, register_products, REPRO_PRODUCTS};

use crate::cli::Context;

/// Register generated products in the manifest
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Create the manifest in --directory if it cannot be found
    #[arg(short, long)]
    pub create: bool,

    /// Add a 'directory' item holding the directory of the manifest
    #[arg(short = 'D', long)]
    pub add_directory: bool,

    /// Path to the repro directory whose products are added
    #[arg(short, long, value_name = "DIR")]
    pub repro: Option<PathBuf>,
}

fn open_or_create(ctx: &Context, create: bool) -> Result<Manifest> {
    match ctx.manifest_path() {
        Ok(path) => Ok(Manifest::load(&path)?),
        Err(e) if create && matches!(e.downcast_ref::<Error>(), Some(Error::NotFound { .. })) => {
            let path = ctx.new_manifest_path();
            info!("creating {}", path.display());
            fs::write(&path, "")
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Manifest::load(&path)?)
        }
        Err(e) => Err(e),
    }
}

/// Execute the `register` command.
pub fn execute(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let mut manifest = open_or_create(ctx, args.create)?;

    if args.add_directory {
        register_directory(&mut manifest)?;
        if !ctx.brief {
            println!("Set item 'directory': {}", manifest.dir().display());
        }
    }

    if let Some(repro) = &args.repro {
        let keys = register_products(&mut manifest, repro, REPRO_PRODUCTS)?;
        if !ctx.brief {
            for key in keys {
                println!("Set file item '{}': {}", key, manifest.get(key)?);
            }
        }
    }
    Ok(())
}
