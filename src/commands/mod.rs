//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `acis-manifest` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the global
//!   [`Context`](crate::cli::Context) and performs the command's logic.
//!
//! The commands are thin: the manifest semantics live in the
//! `acis_manifest` library crate.

pub mod add;
pub mod collect;
pub mod completions;
pub mod delete;
pub mod get;
pub mod getpath;
pub mod obsinfo;
pub mod register;
pub mod set;
pub mod setpath;
pub mod show;
pub mod update;
