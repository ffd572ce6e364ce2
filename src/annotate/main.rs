//! Province annotation for the incident map.
//!
//! Reads the incident arrays from the host document, assigns each incident
//! the province containing it, and writes the document back in place.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use provincer::config::DEFAULT_CONFIG_FILE;
use provincer::pipeline::run;
use provincer::Config;

#[derive(Parser, Debug)]
#[command(name = "annotate")]
#[command(about = "Assign provinces to incidents and rewrite the document in place")]
struct Args {
    /// Optional TOML config file (skipped when missing)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Host document, overrides the config
    #[arg(long)]
    document: Option<PathBuf>,

    /// Province GeoJSON, overrides the config
    #[arg(long)]
    regions: Option<PathBuf>,

    /// Annotate and report without writing the document
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    if let Some(document) = args.document {
        config.document = document;
    }
    if let Some(regions) = args.regions {
        config.regions = regions;
    }

    info!("Document: {}", config.document.display());
    info!("Regions: {}", config.regions.display());

    let report = run(&config, args.dry_run).context("Province annotation failed")?;

    if report.unresolved.is_empty() {
        println!("All incidents assigned to a province.");
    } else {
        println!("Unknown province coordinates:");
        for entry in &report.unresolved {
            println!("- {}", entry);
        }
    }

    Ok(())
}
