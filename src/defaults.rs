//! Default values for manifest lookup.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// File name of the per-observation product manifest.
pub const DEFAULT_MANIFEST_FILENAME: &str = "manifest.yaml";

/// File name of the analysis results file, which shares the manifest format.
pub const DEFAULT_RESULTS_FILENAME: &str = "results.yaml";

/// Environment variable that overrides the manifest file name for the CLI.
pub const MANIFEST_FILE_ENV: &str = "ACIS_MANIFEST_FILE";

/// Item key under which `register --add-directory` records the manifest
/// directory.
pub const DIRECTORY_KEY: &str = "directory";
