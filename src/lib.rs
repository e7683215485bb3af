//! # ACIS Observation Manifest Library
//!
//! This library manages the per-observation *manifest*: a YAML file mapping
//! product names (event files, exposure maps, region files, parameters such as
//! the redshift) to values and file paths. Every step of an ACIS reduction
//! pipeline locates the manifest, reads its inputs from it and registers its
//! outputs in it. The `acis-manifest` command-line tool is a thin wrapper
//! around this crate.
//!
//! ## Quick Example
//!
//! ```
//! use acis_manifest::manifest::Manifest;
//! use acis_manifest::value::Value;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut manifest = Manifest::load(dir.path().join("manifest.yaml")).unwrap();
//!
//! // String tokens are parsed into typed values
//! manifest.set("redshift", "0.154").unwrap();
//! assert_eq!(manifest.get("redshift").unwrap(), Value::Float(0.154));
//!
//! // File items are stored relative to the manifest directory
//! let evt2 = dir.path().join("repro/evt2.fits");
//! manifest.setpath("evt2", &[&evt2]).unwrap();
//! assert_eq!(manifest.get("evt2").unwrap(), Value::Str("repro/evt2.fits".into()));
//! ```
//!
//! ## Core Concepts
//!
//! - **Values (`value`)**: the typed union stored in the manifest and the
//!   string-token parser, including the rule that a one-element list is
//!   stored as the bare element.
//! - **Paths (`path`)**: conversion between caller paths and the
//!   manifest-relative form they are stored in.
//! - **Store (`manifest`)**: the ordered, write-through YAML key-value store.
//! - **Locator (`locate`)**: upward search for the manifest file.
//! - **Helpers**: `obsdir` (the `<name>_oi<obsid>` directory convention),
//!   `register` (recording reprocessed products) and `collect` (tabulating
//!   items across many manifests).

pub mod collect;
pub mod defaults;
pub mod error;
pub mod locate;
pub mod manifest;
pub mod obsdir;
pub mod path;
pub mod register;
pub mod value;

#[cfg(test)]
mod path_proptest;
