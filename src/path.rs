//! Path manipulation utilities for manifest file references
//!
//! File items are stored relative to the directory holding the manifest, so
//! that a data directory can be moved or shared as a whole. On read they are
//! joined back onto that directory and returned either absolute or relative
//! to the caller's working directory.
//!
//! All functions here are lexical: they never touch the filesystem and never
//! resolve symlinks.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::value::Value;

/// A stored path reference resolved against the manifest directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl ResolvedPath {
    /// Join the resolved path(s) into one delimited string.
    pub fn join(&self, sep: &str) -> String {
        match self {
            ResolvedPath::Single(p) => p.display().to_string(),
            ResolvedPath::Many(ps) => ps
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(sep),
        }
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        match self {
            ResolvedPath::Single(p) => vec![p],
            ResolvedPath::Many(ps) => ps,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResolvedPath::Single(_) => 1,
            ResolvedPath::Many(ps) => ps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a stored path value against the manifest directory.
///
/// `stored` must be a string or a list of strings. With `relative_to` set the
/// result is expressed relative to that directory, otherwise it is absolute
/// (given an absolute `manifest_dir`).
pub fn resolve_path(
    manifest_dir: &Path,
    stored: &Value,
    relative_to: Option<&Path>,
) -> Result<ResolvedPath> {
    let resolve_one = |value: &Value| -> Result<PathBuf> {
        let s = value.as_str().ok_or_else(|| {
            Error::path(format!("item value is not a file path: {}", value))
        })?;
        let full = normalize(&manifest_dir.join(s));
        Ok(match relative_to {
            Some(base) => relative_path(&full, &normalize(base)),
            None => full,
        })
    };

    match stored {
        Value::List(items) => Ok(ResolvedPath::Many(
            items.iter().map(resolve_one).collect::<Result<_>>()?,
        )),
        other => Ok(ResolvedPath::Single(resolve_one(other)?)),
    }
}

/// Convert caller paths into the manifest-relative form used for storage.
///
/// Relative inputs are taken relative to `cwd`. A single path yields a string
/// value; several paths yield a list.
pub fn store_path<P: AsRef<Path>>(manifest_dir: &Path, cwd: &Path, paths: &[P]) -> Result<Value> {
    if paths.is_empty() {
        return Err(Error::path("no file paths given"));
    }
    let base = normalize(manifest_dir);
    let items = paths
        .iter()
        .map(|p| {
            let abs = normalize(&cwd.join(p.as_ref()));
            Value::Str(relative_path(&abs, &base).display().to_string())
        })
        .collect();
    Ok(Value::collapse(items))
}

/// Pair up two resolved path lists item by item.
pub fn pair_paths(a: ResolvedPath, b: ResolvedPath) -> Result<Vec<(PathBuf, PathBuf)>> {
    if a.len() != b.len() {
        return Err(Error::path(format!(
            "inconsistent path lists: {} vs. {} files",
            a.len(),
            b.len()
        )));
    }
    Ok(a.into_vec().into_iter().zip(b.into_vec()).collect())
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where possible.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Express `path` relative to the directory `base`.
///
/// Both inputs should be normalized and of the same kind (both absolute or
/// both relative). Returns `.` when they are equal.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let path_comps: Vec<Component> = path.components().collect();
    let base_comps: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = path_comps
        .iter()
        .zip(base_comps.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_comps.len() {
        out.push("..");
    }
    for comp in &path_comps[common..] {
        out.push(comp.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
