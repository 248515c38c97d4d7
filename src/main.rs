//! Featurekit CLI - install and inspect feature-engineering primitives.
//!
//! This is the command-line entry point, which:
//! - Loads configuration from TOML (or XDG defaults) with `FEATUREKIT_*`
//!   environment overrides
//! - Installs primitive bundles from directories, archives, and URLs
//! - Lists and inspects installed primitives

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use featurekit::config::FeaturekitConfig;
use featurekit::install;

/// Featurekit - feature-engineering primitive tooling
#[derive(Parser, Debug)]
#[command(name = "featurekit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run in verbose mode (debug logging)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: install::Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("featurekit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("featurekit=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => FeaturekitConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FeaturekitConfig::default(),
    }
    .with_env_overrides();

    install::execute(config, cli.command).await?;
    Ok(())
}
