// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use csv::WriterBuilder;
use sqlx::sqlite::SqlitePool;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::coins::list_coins;
use crate::error::{Error, Result};
use crate::models::StoredCoin;

/// Snapshot header, identical to the table's column names
pub const COLUMNS: [&str; 7] = [
    "id",
    "symbol",
    "name",
    "cmc_rank",
    "volume_24h",
    "volume_7d",
    "volume_30d",
];

/// Order coins by 24h volume, highest first. Equal volumes keep their
/// relative order.
pub fn sort_by_volume(coins: &mut [StoredCoin]) {
    coins.sort_by(|a, b| b.volume_24h.total_cmp(&a.volume_24h));
}

/// Write every stored coin to `path` as CSV, replacing any existing file.
/// Returns the number of rows written.
pub async fn export_snapshot(pool: &SqlitePool, path: &Path) -> Result<usize> {
    let mut coins = list_coins(pool)
        .await
        .map_err(|e| Error::export(path, e))?;
    sort_by_volume(&mut coins);

    replace_file(path, |file| {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(COLUMNS)?;
        for coin in &coins {
            writer.serialize(coin)?;
        }
        writer.flush()
    })
    .map_err(|e| Error::export(path, e))?;

    debug!(rows = coins.len(), path = %path.display(), "snapshot written");
    Ok(coins.len())
}

/// Write into a temp file beside `path` and rename it over `path` once
/// complete. On failure `path` is untouched and the temp file is removed.
fn replace_file<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    write(&mut file)?;
    file.flush()?;
    file.persist(path)?;
    Ok(())
}
