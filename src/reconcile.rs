// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CoinRecord, ExchangeListing, MarketEntry, MarketListing};

/// Uppercase and trim a ticker. Returns `None` when nothing is left.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

/// Normalize the market catalog into one record per symbol.
///
/// Records keep the position where their symbol first appeared, while a
/// later duplicate replaces the values. Any entry without a usable symbol or
/// name fails the whole catalog.
pub fn market_catalog(payload: &Value) -> Result<Vec<CoinRecord>> {
    let listing = MarketListing::deserialize(payload).map_err(|e| {
        Error::schema(format!(
            "market catalog has no valid data.cryptoCurrencyList: {}",
            e
        ))
    })?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut records: Vec<CoinRecord> = Vec::new();

    for (index, entry) in listing.data.crypto_currency_list.into_iter().enumerate() {
        let record = market_record(index, entry)?;
        match positions.get(&record.symbol) {
            Some(&slot) => records[slot] = record,
            None => {
                positions.insert(record.symbol.clone(), records.len());
                records.push(record);
            }
        }
    }

    Ok(records)
}

fn market_record(index: usize, entry: MarketEntry) -> Result<CoinRecord> {
    let symbol = entry
        .symbol
        .as_deref()
        .and_then(normalize_symbol)
        .ok_or_else(|| Error::schema(format!("market entry #{} has no symbol", index)))?;

    let name = entry
        .name
        .ok_or_else(|| Error::schema(format!("market entry {} has no name", symbol)))?;

    let first_quote = entry.quotes.as_ref().and_then(|quotes| quotes.first());

    Ok(CoinRecord {
        symbol,
        name,
        rank: entry.cmc_rank.or(entry.rank),
        volume_24h: first_quote.and_then(|q| q.volume_24h).unwrap_or(0.0),
        volume_7d: entry
            .volume_7d
            .or_else(|| first_quote.and_then(|q| q.volume_7d))
            .unwrap_or(0.0),
        volume_30d: entry
            .volume_30d
            .or_else(|| first_quote.and_then(|q| q.volume_30d))
            .unwrap_or(0.0),
    })
}

/// Collect the normalized symbols of the exchange catalog.
///
/// Accepts a bare array of currencies or an object holding the array under
/// `data`. Every entry must carry a non-empty string `symbol`.
pub fn exchange_symbols(payload: &Value) -> Result<HashSet<String>> {
    let listing = ExchangeListing::deserialize(payload).map_err(|e| {
        Error::schema(format!(
            "exchange catalog is neither a currency list nor {{\"data\": [...]}}: {}",
            e
        ))
    })?;

    listing
        .into_entries()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .symbol
                .as_deref()
                .and_then(normalize_symbol)
                .ok_or_else(|| Error::schema(format!("exchange entry #{} has no symbol", index)))
        })
        .collect()
}

/// Keep the market records whose symbol the exchange does not list, in
/// market order.
pub fn missing_coins(market: Vec<CoinRecord>, exchange: &HashSet<String>) -> Vec<CoinRecord> {
    market
        .into_iter()
        .filter(|coin| !exchange.contains(&coin.symbol))
        .collect()
}

/// Coins present in the market catalog but absent from the exchange.
pub fn reconcile(market: &Value, exchange: &HashSet<String>) -> Result<Vec<CoinRecord>> {
    let catalog = market_catalog(market)?;
    let total = catalog.len();
    let missing = missing_coins(catalog, exchange);
    debug!(
        market = total,
        exchange = exchange.len(),
        missing = missing.len(),
        "reconciled catalogs"
    );
    Ok(missing)
}
