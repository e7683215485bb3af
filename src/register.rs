//! Registration of generated products in the manifest.
//!
//! After reprocessing, the products of interest sit in the repro directory
//! under predictable file name patterns. Each pattern is globbed and the
//! matches are stored as file items.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::defaults::DIRECTORY_KEY;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::value::Value;

/// A manifest key and the file name pattern of its product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductGlob {
    pub key: &'static str,
    pub pattern: &'static str,
}

/// Products written by the ACIS reprocessing step.
pub const REPRO_PRODUCTS: &[ProductGlob] = &[
    ProductGlob {
        key: "evt2",
        pattern: "acisf*_repro_evt2.fits",
    },
    ProductGlob {
        key: "bpix",
        pattern: "acisf*_repro_bpix1.fits",
    },
    ProductGlob {
        key: "fov",
        pattern: "acisf*_repro_fov1.fits",
    },
    // may match several aspect solution files
    ProductGlob {
        key: "asol",
        pattern: "pcadf*_asol?.fits",
    },
    ProductGlob {
        key: "pbk",
        pattern: "acisf*_pbk0.fits",
    },
    ProductGlob {
        key: "msk",
        pattern: "acisf*_msk1.fits",
    },
];

/// Glob `pattern` inside `dir`, returning the sorted matches.
pub fn find_products(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let mut matches: Vec<PathBuf> = glob::glob(&format!("{}/{}", escaped_dir, pattern))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("skipping unreadable path: {}", e);
                None
            }
        })
        .collect();
    matches.sort();
    Ok(matches)
}

/// Register each product found in `dir` under its key.
///
/// Products without a match are skipped with a warning. Returns the keys that
/// were registered.
pub fn register_products(
    manifest: &mut Manifest,
    dir: &Path,
    products: &[ProductGlob],
) -> Result<Vec<&'static str>> {
    info!("adding products from: {}", dir.display());
    let dir = std::path::absolute(dir)?;
    let mut registered = Vec::new();
    for product in products {
        let found = find_products(&dir, product.pattern)?;
        if found.is_empty() {
            warn!(
                "no file matches '{}' for item '{}'",
                product.pattern, product.key
            );
            continue;
        }
        manifest.setpath_from(product.key, &dir, &found)?;
        info!("registered '{}': {} file(s)", product.key, found.len());
        registered.push(product.key);
    }
    Ok(registered)
}

/// Record the directory holding the manifest as the `directory` item.
pub fn register_directory(manifest: &mut Manifest) -> Result<()> {
    let dir = manifest.dir().display().to_string();
    manifest.set(DIRECTORY_KEY, Value::Str(dir))
}
