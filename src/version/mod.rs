use anyhow::{bail, Result};
use std::fmt::Display;

use crate::fl;

pub trait Version: Display + Ord + Sized {
    fn parse(input: &str) -> Result<Self>;
}

/// Pick the greatest version, keeping the first one seen on ties
pub fn max_version<V, I>(versions: I) -> Result<V>
where
    V: Version,
    I: IntoIterator<Item = V>,
{
    let max = versions
        .into_iter()
        .reduce(|current, next| if next > current { next } else { current });

    match max {
        Some(v) => Ok(v),
        None => bail!(fl!("err_no_version")),
    }
}

pub mod plantuml_version;
