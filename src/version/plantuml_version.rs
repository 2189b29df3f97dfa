use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::Version;
use crate::fl;

lazy_static! {
    // Only the leading three groups count, anything after them is ignored
    static ref VERSION_RE: Regex =
        Regex::new(r"^(?P<major>\d+)\.(?P<year>\d+)\.(?P<minor>\d+)").unwrap();
}

/// A PlantUML release version in the `<major>.<year>.<minor>` scheme
///
/// Fields are declared in precedence order, so the derived ordering compares
/// major first, then year, then minor, all as integers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct PlantUmlVersion {
    pub major: u64,
    pub year: u64,
    pub minor: u64,
}

impl fmt::Display for PlantUmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.year, self.minor)
    }
}

impl Version for PlantUmlVersion {
    fn parse(input: &str) -> Result<Self> {
        let invalid = || anyhow!(fl!("err_invalid_version", version = input));
        let c = VERSION_RE.captures(input).ok_or_else(invalid)?;
        // a group too large for u64 makes the whole string invalid
        let group = |name: &str| -> Result<u64> {
            c.name(name)
                .ok_or_else(invalid)?
                .as_str()
                .parse()
                .map_err(|_| invalid())
        };

        Ok(Self {
            major: group("major")?,
            year: group("year")?,
            minor: group("minor")?,
        })
    }
}
