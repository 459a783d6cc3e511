// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use sqlx::sqlite::SqlitePool;
use tracing::debug;

use crate::error::Result;
use crate::models::{CoinRecord, StoredCoin};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpsertSummary {
    pub inserted: usize,
    pub updated: usize,
}

/// Insert or update every coin by symbol inside one transaction.
///
/// Existing rows get all non-key fields overwritten. Rows are never deleted.
/// If any statement fails the transaction is rolled back and the store is
/// left as it was.
pub async fn upsert_coins(pool: &SqlitePool, coins: &[CoinRecord]) -> Result<UpsertSummary> {
    let mut tx = pool.begin().await?;
    let mut summary = UpsertSummary::default();

    for coin in coins {
        let existing = sqlx::query_as::<_, (i64,)>(
            r#"
            SELECT id
            FROM cryptocurrencies
            WHERE symbol = ?
            "#,
        )
        .bind(&coin.symbol)
        .fetch_optional(&mut *tx)
        .await?;

        match existing {
            Some((id,)) => {
                sqlx::query(
                    r#"
                    UPDATE cryptocurrencies
                    SET name = ?, cmc_rank = ?, volume_24h = ?, volume_7d = ?, volume_30d = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&coin.name)
                .bind(coin.rank)
                .bind(coin.volume_24h)
                .bind(coin.volume_7d)
                .bind(coin.volume_30d)
                .bind(id)
                .execute(&mut *tx)
                .await?;
                summary.updated += 1;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO cryptocurrencies (symbol, name, cmc_rank, volume_24h, volume_7d, volume_30d)
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&coin.symbol)
                .bind(&coin.name)
                .bind(coin.rank)
                .bind(coin.volume_24h)
                .bind(coin.volume_7d)
                .bind(coin.volume_30d)
                .execute(&mut *tx)
                .await?;
                summary.inserted += 1;
            }
        }
    }

    // Dropping `tx` on an early return rolls back
    tx.commit().await?;
    debug!(inserted = summary.inserted, updated = summary.updated, "upsert committed");

    Ok(summary)
}

/// List all stored coins in insertion order
pub async fn list_coins(pool: &SqlitePool) -> Result<Vec<StoredCoin>> {
    let records = sqlx::query_as::<_, StoredCoin>(
        r#"
        SELECT id, symbol, name, cmc_rank, volume_24h, volume_7d, volume_30d
        FROM cryptocurrencies
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(records)
}
