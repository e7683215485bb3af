//! # acis-manifest CLI
//!
//! This is the binary entry point for the `acis-manifest` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Locating the manifest and dispatching to the subcommand.
//! - Reporting errors (with their cause chain) and exit code 1.
//!
//! The manifest semantics are defined in the `lib.rs` library crate, so that
//! pipeline tools can use the store directly without going through the CLI.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
