// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Reserve Archive - entry point
//!
//! Runs end-to-end: every year from the configured starting year is brought
//! up to date, then the process exits.

use anyhow::{Context, Result};
use clap::Parser;
use reserve_archive::{ArchiveBuilder, ArchiveConfig, MimerClient};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reserve-archive")]
#[command(about = "Archive daily FCR/aFFR/mFFR auction prices from Mimer", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the yearly archives (overrides config and environment)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reserve_archive=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config =
        ArchiveConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    info!(
        "Archive directory: {}, starting year {}",
        config.data_dir.display(),
        config.starting_year
    );

    let client = MimerClient::from_config(&config)?;
    let builder = ArchiveBuilder::new(client, config);

    let today = chrono::Local::now().date_naive();
    let report = builder.run(today).await.context("Archive run failed")?;

    info!(
        "Done: {} lines written, {} years already complete",
        report.total_written(),
        report.complete_years.len()
    );
    Ok(())
}
