use anyhow::Result;
use clap::Parser;
use reqwest::blocking::Client;

use cli::Opts;
use config::Config;
use version::max_version;

mod artifact;
mod cli;
mod config;
mod http;
mod i18n;
mod macros;
mod metadata;
mod version;

pub use i18n::I18N_LOADER;

fn main() -> Result<()> {
    // no options besides --help and --version
    let _opts = Opts::parse();

    let config = Config::default();
    let client = Client::new();

    // Find out which release is the latest one
    let versions = metadata::fetch(&client, &config.metadata_url)?.versions();
    println_with_prefix_and_fl!("found_versions", count = versions.len());
    let latest = max_version(versions)?;
    println_with_prefix_and_fl!("latest_version", version = latest.to_string());

    // Download it
    let link = artifact::download_link(&config, &latest);
    artifact::download(&client, &link, &config.target)?;
    println_with_prefix_and_fl!("done");

    Ok(())
}
