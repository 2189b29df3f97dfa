use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::{
    fs::{self, File},
    io::{self, Read},
    path::Path,
};

use crate::{
    config::Config, fl, http, println_with_prefix, println_with_prefix_and_fl, version::Version,
};

/// Build the download URL of the artifact for `version`
pub fn download_link<V: Version>(config: &Config, version: &V) -> String {
    config
        .artifact_url
        .replace("{VERSION}", &version.to_string())
}

/// Download `url` to `target`, replacing whatever was there
pub fn download<P: AsRef<Path>>(client: &Client, url: &str, target: P) -> Result<u64> {
    let target = target.as_ref();

    create_parent_dir(target)?;
    println_with_prefix_and_fl!("download", url = url);
    let resp = http::get(client, url)?;
    println_with_prefix_and_fl!("save_to", path = target.display().to_string());

    write_to(resp, target)
}

/// Create the parent directory of `target` and any missing ancestors
fn create_parent_dir(target: &Path) -> Result<()> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| fl!("err_create_dir", path = parent.display().to_string())),
        _ => Ok(()),
    }
}

/// Copy everything from `reader` into `target`, truncating it first
fn write_to<R: Read>(mut reader: R, target: &Path) -> Result<u64> {
    let write_err = || fl!("err_write", path = target.display().to_string());
    let mut file = File::create(target).with_context(write_err)?;

    io::copy(&mut reader, &mut file).with_context(write_err)
}
