//! Upward search for the manifest file.
//!
//! Pipeline steps run from anywhere inside an observation's data directory
//! (`repro/`, `spc/`, `img/`, ...). The manifest lives at the top of that tree,
//! so lookup starts at a given directory and walks towards the root.

use std::path::{Path, PathBuf};

use log::debug;

use crate::defaults::{DEFAULT_MANIFEST_FILENAME, DEFAULT_RESULTS_FILENAME};
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::path::normalize;

/// Find `filename` in `start_dir` or the nearest ancestor directory.
///
/// A relative `start_dir` is taken relative to the process working
/// directory. The filesystem root itself is also checked.
pub fn find_manifest<P: AsRef<Path>>(filename: &str, start_dir: P) -> Result<PathBuf> {
    let start = normalize(&std::path::absolute(start_dir.as_ref())?);
    for dir in start.ancestors() {
        let candidate = dir.join(filename);
        if candidate.exists() {
            debug!("found {} at {}", filename, candidate.display());
            return Ok(candidate);
        }
    }
    Err(Error::NotFound {
        filename: filename.to_string(),
        start,
    })
}

/// Find and load the manifest named `filename`.
pub fn get_manifest<P: AsRef<Path>>(filename: &str, start_dir: P) -> Result<Manifest> {
    Manifest::load(find_manifest(filename, start_dir)?)
}

/// Find and load the default `manifest.yaml`.
pub fn get_default_manifest<P: AsRef<Path>>(start_dir: P) -> Result<Manifest> {
    get_manifest(DEFAULT_MANIFEST_FILENAME, start_dir)
}

/// Find and load the analysis results file (`results.yaml`).
pub fn get_results<P: AsRef<Path>>(start_dir: P) -> Result<Manifest> {
    get_manifest(DEFAULT_RESULTS_FILENAME, start_dir)
}
