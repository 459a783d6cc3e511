// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

mod api;
mod coins;
mod config;
mod db;
mod error;
mod export;
mod models;
mod pipeline;
mod reconcile;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

/// Find the CoinMarketCap coins SimpleSwap does not support, store them and
/// export them sorted by 24h volume.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();
    Cli::parse();

    let config = config::load_config()?;
    let report = pipeline::run(&config).await?;

    println!("✅ {}", report);
    println!("✅ Data saved and exported successfully!");

    Ok(())
}
