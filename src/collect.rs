//! Collect items from many manifests into one table.
//!
//! Each input manifest contributes one row holding the requested keys in
//! order. Rows are written as CSV (header from the first row) or as a JSON
//! array of objects.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::manifest::{Manifest, Record};
use crate::value::Value;

/// Parse the key list argument.
///
/// If `arg` names a readable file, keys are read one per line; otherwise
/// `arg` is a comma-separated list. Blank entries are dropped.
pub fn parse_keys(arg: &str) -> Vec<String> {
    let text = match fs::read_to_string(arg) {
        Ok(content) => {
            debug!("reading keys from file {}", arg);
            content.lines().map(str::to_string).collect::<Vec<_>>()
        }
        Err(_) => arg.split(',').map(str::to_string).collect(),
    };
    text.into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Read `keys` from every manifest in `files`; missing items are `None`.
///
/// Every input file must exist.
pub fn collect<P: AsRef<Path>>(files: &[P], keys: &[String], split_list: bool) -> Result<Vec<Record>> {
    files
        .iter()
        .map(|file| {
            let file = file.as_ref();
            if !file.is_file() {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("manifest file not found: {}", file.display()),
                )));
            }
            let manifest = Manifest::load(file)?;
            let record = manifest.gets(keys, None, split_list)?;
            debug!(
                "{}: {} value(s)",
                file.display(),
                record.iter().filter(|(_, v)| v.is_some()).count()
            );
            Ok(record)
        })
        .collect()
}

fn cell(value: &Option<Value>) -> String {
    match value {
        Some(v) => v.join(" "),
        None => String::new(),
    }
}

/// Write rows as CSV, with a header line taken from the first row unless
/// `header` is false.
pub fn write_csv<W: Write>(writer: W, rows: &[Record], header: bool) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    if header {
        if let Some(first) = rows.first() {
            csv.write_record(first.iter().map(|(k, _)| k.as_str()))?;
        }
    }
    for row in rows {
        csv.write_record(row.iter().map(|(_, v)| cell(v)))?;
    }
    csv.flush()?;
    Ok(())
}

/// Convert rows into a JSON array of ordered objects.
pub fn to_json(rows: &[Record]) -> Result<serde_json::Value> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut object = serde_json::Map::new();
        for (key, value) in row {
            object.insert(key.clone(), serde_json::to_value(value)?);
        }
        out.push(serde_json::Value::Object(object));
    }
    Ok(serde_json::Value::Array(out))
}
