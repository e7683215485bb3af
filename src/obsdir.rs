//! Object name and observation ID from the data directory path.
//!
//! The root directory of an observation's data is named `<name>_oi<obsid>`,
//! e.g. `/data/a1795_oi493/repro`.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

fn obsdir_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^.*/(?P<name>[^/_]+)_oi(?P<obsid>\d+).*$").expect("valid obsdir regex")
    })
}

/// Identity of an observation derived from its directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsDir {
    pub name: String,
    pub obsid: u32,
}

impl ObsDir {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = path.as_ref().to_string_lossy();
        let caps = obsdir_regex().captures(&text).ok_or_else(|| {
            Error::parse(format!(
                "path does not contain a '<name>_oi<obsid>' directory: {}",
                text
            ))
        })?;
        let obsid = caps["obsid"]
            .parse::<u32>()
            .map_err(|e| Error::parse(format!("invalid obsid '{}': {}", &caps["obsid"], e)))?;
        Ok(Self {
            name: caps["name"].to_string(),
            obsid,
        })
    }
}
