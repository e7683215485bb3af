//! # Obsinfo Command Implementation
//!
//! Prints the object name and observation ID encoded in the name of the
//! manifest's directory (`<name>_oi<obsid>`).

use anyhow::Result;

use acis_manifest::obsdir::ObsDir;

use crate::cli::Context;

/// Execute the `obsinfo` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let manifest = ctx.manifest()?;
    let obs = ObsDir::from_path(manifest.dir())?;
    if ctx.brief {
        println!("{} {}", obs.name, obs.obsid);
    } else {
        println!("name: {}", obs.name);
        println!("obsid: {}", obs.obsid);
    }
    Ok(())
}
