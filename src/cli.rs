use clap::Parser;

/// Download the latest PlantUML jar from Maven Central
#[derive(Parser, Debug)]
#[clap(about, version)]
pub struct Opts {}
