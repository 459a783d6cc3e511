// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::api::CatalogClient;
use crate::coins::{upsert_coins, UpsertSummary};
use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::export::export_snapshot;
use crate::reconcile;

#[derive(Debug)]
pub struct RunReport {
    pub exchange_symbols: usize,
    pub missing: usize,
    pub summary: UpsertSummary,
    pub exported: usize,
    pub snapshot_path: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} coins are not on the exchange ({} listed there): {} new, {} updated; {} rows exported to {}",
            self.missing,
            self.exchange_symbols,
            self.summary.inserted,
            self.summary.updated,
            self.exported,
            self.snapshot_path.display()
        )
    }
}

/// Fetch both catalogs, store the coins missing from the exchange and export
/// the store. Stops at the first failing stage.
pub async fn run(config: &Config) -> Result<RunReport> {
    let client = CatalogClient::new()?;

    println!("Fetching market catalog...");
    let market = client.fetch_json(&config.market_url).await?;
    println!("Fetching exchange catalog...");
    let exchange = client.fetch_json(&config.exchange_url).await?;

    let exchange_symbols = reconcile::exchange_symbols(&exchange)?;
    let missing = reconcile::reconcile(&market, &exchange_symbols)?;
    println!("✅ {} coins missing from the exchange", missing.len());

    fs::create_dir_all(&config.data_dir).map_err(sqlx::Error::Io)?;
    let pool = db::create_db_pool(&config.database_path()).await?;
    let summary = upsert_coins(&pool, &missing).await?;
    info!(inserted = summary.inserted, updated = summary.updated, "store updated");

    let snapshot_path = config.snapshot_path();
    let exported = export_snapshot(&pool, &snapshot_path).await?;
    pool.close().await;

    Ok(RunReport {
        exchange_symbols: exchange_symbols.len(),
        missing: missing.len(),
        summary,
        exported,
        snapshot_path,
    })
}
