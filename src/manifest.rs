//! # Manifest Store
//!
//! The manifest is a YAML mapping from item keys to values or file paths,
//! one file per observation. Every pipeline step loads it to find its inputs
//! and writes its outputs back through it.
//!
//! ## Semantics
//!
//! - Entries keep their file order. Items nobody touches are kept as raw YAML
//!   nodes and written back unchanged, including nodes outside the typed
//!   [`Value`] union. Comments are not preserved.
//! - Every mutation is written through to disk before it returns. `save`
//!   writes a sibling temp file and renames it over the manifest, so readers
//!   never see a half-written file.
//! - `add` refuses existing keys, `update` and `delete` refuse missing keys,
//!   `set` accepts both.
//!
//! ```no_run
//! use acis_manifest::manifest::Manifest;
//!
//! let mut manifest = Manifest::load("manifest.yaml")?;
//! manifest.set("redshift", "0.154")?;
//! let evt2 = manifest.getpath("evt2", false, None)?;
//! # Ok::<(), acis_manifest::error::Error>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::Mapping;

use crate::error::{Error, Result};
use crate::path::{pair_paths, resolve_path, store_path, ResolvedPath};
use crate::value::{IntoValue, Value};

/// Ordered result of a batch read: `(key, value)` with `None` (or the given
/// default) for missing keys.
pub type Record = Vec<(String, Option<Value>)>;

/// An observation manifest bound to its backing file.
#[derive(Debug, Clone)]
pub struct Manifest {
    filepath: PathBuf,
    entries: Mapping,
}

impl Manifest {
    /// Create an empty manifest bound to `path`. Nothing is written until
    /// the first mutation.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            filepath: std::path::absolute(path.as_ref())?,
            entries: Mapping::new(),
        })
    }

    /// Load the manifest at `path`.
    ///
    /// A missing or empty file gives an empty manifest. Invalid YAML, or a
    /// document that is not a mapping with non-empty string keys, is a
    /// `Parse` error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut manifest = Self::new(path)?;
        if !manifest.filepath.exists() {
            debug!(
                "manifest {} does not exist; starting empty",
                manifest.filepath.display()
            );
            return Ok(manifest);
        }

        let content = fs::read_to_string(&manifest.filepath)?;
        manifest.entries = parse_entries(&content).map_err(|e| {
            Error::parse(format!(
                "invalid manifest {}: {}",
                manifest.filepath.display(),
                e
            ))
        })?;
        debug!(
            "loaded {} items from {}",
            manifest.entries.len(),
            manifest.filepath.display()
        );
        Ok(manifest)
    }

    /// Absolute path of the backing file.
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// Directory holding the backing file; stored paths are relative to it.
    pub fn dir(&self) -> &Path {
        self.filepath.parent().unwrap_or_else(|| Path::new("/"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Item keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(|k| k.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the value of an item.
    pub fn get(&self, key: &str) -> Result<Value> {
        let node = self.entries.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })?;
        Value::from_yaml(node).map_err(|e| match e {
            Error::Parse { message } => Error::parse(format!("item '{}': {}", key, message)),
            other => other,
        })
    }

    /// Get several items at once.
    ///
    /// Missing keys and null items map to `default`. With `split_list`, list values are
    /// expanded into `key[0]`, `key[1]`, ... for flat tabular export.
    pub fn gets<S: AsRef<str>>(
        &self,
        keys: &[S],
        default: Option<Value>,
        split_list: bool,
    ) -> Result<Record> {
        let mut record = Record::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            // empty placeholders (`T_avg:`) read like missing items
            let value = match self.entries.get(key) {
                None | Some(serde_yaml::Value::Null) => default.clone(),
                Some(_) => Some(self.get(key)?),
            };
            if split_list {
                if let Some(items) = value.as_ref().and_then(Value::as_list) {
                    for (i, item) in items.iter().enumerate() {
                        record.push((format!("{}[{}]", key, i), Some(item.clone())));
                    }
                    continue;
                }
            }
            record.push((key.to_string(), value));
        }
        Ok(record)
    }

    /// Set an item, adding it or replacing its value.
    pub fn set<V: IntoValue>(&mut self, key: &str, value: V) -> Result<()> {
        check_key(key)?;
        let node = value.into_value().to_yaml()?;
        let previous = self.entries.clone();
        self.entries
            .insert(serde_yaml::Value::String(key.to_string()), node);
        self.commit(previous)
    }

    /// Add a new item; fails if it already exists.
    pub fn add<V: IntoValue>(&mut self, key: &str, value: V) -> Result<()> {
        if self.has(key) {
            return Err(Error::KeyAlreadyExists {
                key: key.to_string(),
            });
        }
        self.set(key, value)
    }

    /// Update an existing item; fails if it does not exist.
    pub fn update<V: IntoValue>(&mut self, key: &str, value: V) -> Result<()> {
        if !self.has(key) {
            return Err(Error::KeyNotFound {
                key: key.to_string(),
            });
        }
        self.set(key, value)
    }

    /// Delete an item; fails if it does not exist.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        if !self.has(key) {
            return Err(Error::KeyNotFound {
                key: key.to_string(),
            });
        }
        let previous = self.entries.clone();
        // `shift_remove` keeps the order of the remaining items
        self.entries.shift_remove(key);
        self.commit(previous)
    }

    /// Save, rolling the entries back to `previous` if the write fails.
    fn commit(&mut self, previous: Mapping) -> Result<()> {
        self.save().inspect_err(|_| self.entries = previous)
    }

    /// Set a file item to the given path(s), stored relative to the manifest
    /// directory. Relative inputs are taken relative to the process working
    /// directory.
    pub fn setpath<P: AsRef<Path>>(&mut self, key: &str, paths: &[P]) -> Result<()> {
        let cwd = std::env::current_dir()?;
        self.setpath_from(key, &cwd, paths)
    }

    /// Like [`Manifest::setpath`], with relative inputs taken relative to `cwd`.
    pub fn setpath_from<P: AsRef<Path>>(&mut self, key: &str, cwd: &Path, paths: &[P]) -> Result<()> {
        let value = store_path(self.dir(), cwd, paths)?;
        self.set(key, value)
    }

    /// Resolve a file item, absolute or relative to `relative_to`.
    pub fn resolve(&self, key: &str, relative_to: Option<&Path>) -> Result<ResolvedPath> {
        let value = self.get(key)?;
        resolve_path(self.dir(), &value, relative_to)
    }

    /// Get the path(s) of a file item as a string.
    ///
    /// With `relative`, paths are relative to the process working directory
    /// instead of absolute. Multiple paths are joined with `sep` (a single
    /// space when `None`).
    pub fn getpath(&self, key: &str, relative: bool, sep: Option<&str>) -> Result<String> {
        let cwd = if relative {
            Some(std::env::current_dir()?)
        } else {
            None
        };
        let resolved = self.resolve(key, cwd.as_deref())?;
        Ok(resolved.join(sep.unwrap_or(" ")))
    }

    /// Resolve two per-item file lists (absolute) and pair them up.
    pub fn getpath_pairs(&self, key_a: &str, key_b: &str) -> Result<Vec<(PathBuf, PathBuf)>> {
        let a = self.resolve(key_a, None)?;
        let b = self.resolve(key_b, None)?;
        pair_paths(a, b).map_err(|e| match e {
            Error::Path { message } => {
                Error::path(format!("items '{}' and '{}': {}", key_a, key_b, message))
            }
            other => other,
        })
    }

    /// Serialize the entries to YAML text.
    pub fn dump(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.entries)?)
    }

    /// Print the manifest contents to stdout.
    pub fn show(&self) -> Result<()> {
        print!("{}", self.dump()?);
        Ok(())
    }

    /// Write the manifest to its backing file.
    ///
    /// The content goes to a hidden temp file next to the manifest first and
    /// is then renamed over it.
    pub fn save(&self) -> Result<()> {
        let content = self.dump()?;
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        let name = self
            .filepath
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manifest".to_string());
        let temp_path = dir.join(format!(".{}.tmp", name));
        let written = write_synced(&temp_path, content.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.filepath));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        debug!("saved {}", self.filepath.display());
        Ok(())
    }
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey);
    }
    Ok(())
}

fn parse_entries(content: &str) -> Result<Mapping> {
    let doc: serde_yaml::Value = serde_yaml::from_str(content)?;
    let entries = match doc {
        serde_yaml::Value::Null => return Ok(Mapping::new()),
        serde_yaml::Value::Mapping(m) => m,
        _ => return Err(Error::parse("top-level YAML node is not a mapping")),
    };
    for key in entries.keys() {
        match key.as_str() {
            Some(k) if !k.is_empty() => {}
            _ => {
                return Err(Error::parse(format!(
                    "item keys must be non-empty strings, found {:?}",
                    key
                )))
            }
        }
    }
    Ok(entries)
}
