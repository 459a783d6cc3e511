// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// The one table the store owns. Applied every time the store is opened.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cryptocurrencies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    symbol TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    cmc_rank INTEGER,
    volume_24h REAL NOT NULL DEFAULT 0 CHECK (volume_24h >= 0),
    volume_7d REAL NOT NULL DEFAULT 0 CHECK (volume_7d >= 0),
    volume_30d REAL NOT NULL DEFAULT 0 CHECK (volume_30d >= 0)
)
"#;

/// Open the store file at `path`, creating it if it doesn't exist
pub async fn create_db_pool(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = connect(options).await?;
    debug!(path = %path.display(), "store opened");

    Ok(pool)
}

async fn connect(options: SqliteConnectOptions) -> Result<SqlitePool> {
    // Single writer
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(SCHEMA).execute(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
pub async fn create_test_pool() -> Result<SqlitePool> {
    use std::str::FromStr;

    connect(SqliteConnectOptions::from_str("sqlite::memory:")?).await
}
