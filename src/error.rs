//! # Error Handling
//!
//! This module defines the centralized error type for the manifest library.
//! It uses the `thiserror` library to build an `Error` enum covering every
//! anticipated failure mode, each with a message naming the offending key,
//! file or path.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all possible failures. Store operations fail with
//!   `KeyNotFound` / `KeyAlreadyExists`, the locator with `NotFound`, and the
//!   path helpers with `Path`. Malformed manifest files and unparseable
//!   directory names surface as `Parse`.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Errors are returned to the caller immediately. Nothing is retried and no
//! sentinel values are returned in place of an error.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for manifest operations
#[derive(Error, Debug)]
pub enum Error {
    /// The requested item is not present in the manifest.
    #[error("manifest doesn't have item: '{key}'")]
    KeyNotFound { key: String },

    /// `add` was called for an item that already exists.
    #[error("manifest already has item: '{key}'")]
    KeyAlreadyExists { key: String },

    /// An item key was empty.
    #[error("invalid item key: keys must be non-empty strings")]
    InvalidKey,

    /// The manifest file (or a value/name string) could not be parsed.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// The manifest file was not found in the start directory or any of its
    /// parents.
    #[error("cannot find manifest file '{filename}' (searched upward from {})", start.display())]
    NotFound { filename: String, start: PathBuf },

    /// A stored or given path (list) is inconsistent.
    #[error("Path error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A CSV writing error, wrapped from `csv::Error`.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    pub(crate) fn path(message: impl Into<String>) -> Self {
        Error::Path {
            message: message.into(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
