//! # Collect Command Implementation
//!
//! Gathers the requested items from several manifest (or results) files into
//! one table, one row per file. Missing items become empty cells (CSV) or
//! `null` (JSON).
//!
//! ## Example
//!
//! ```bash
//! acis-manifest collect -k name,obsid,redshift -i */manifest.yaml -o sample.csv
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};

use acis_manifest::collect::{collect, parse_keys, to_json, write_csv};

use crate::cli::Context;

/// Output format for collected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header line
    #[default]
    Csv,
    /// A JSON array of objects
    Json,
}

/// Collect items from several manifests into CSV or JSON
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Keys to collect (in order): a comma-separated list, or a file
    /// containing the keys one per line
    #[arg(short, long, value_name = "KEYS")]
    pub keys: String,

    /// Input manifest files
    #[arg(short, long, value_name = "FILE", required = true, num_args = 1..)]
    pub infile: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub outfile: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Expand list values into indexed columns (`key[0]`, `key[1]`, ...)
    #[arg(long)]
    pub split_list: bool,
}

/// Execute the `collect` command.
///
/// With the global `--brief` flag the CSV header line is omitted.
pub fn execute(args: CollectArgs, ctx: &Context) -> Result<()> {
    let keys = parse_keys(&args.keys);
    if keys.is_empty() {
        anyhow::bail!("no keys given to collect");
    }
    log::info!("keys: {:?}", keys);

    let rows = collect(&args.infile, &keys, args.split_list)?;

    let mut out: Box<dyn Write> = match &args.outfile {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Csv => write_csv(&mut out, &rows, !ctx.brief)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &to_json(&rows)?)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
