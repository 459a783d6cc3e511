// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize};

/// A coin listed by the market catalog but not by the exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRecord {
    pub symbol: String,
    pub name: String,
    pub rank: Option<i64>,
    pub volume_24h: f64,
    pub volume_7d: f64,
    pub volume_30d: f64,
}

/// A row of the `cryptocurrencies` table. Field names match the column names,
/// which are also the snapshot header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredCoin {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub cmc_rank: Option<i64>,
    pub volume_24h: f64,
    pub volume_7d: f64,
    pub volume_30d: f64,
}

// Market catalog (CoinMarketCap data-api listing)

#[derive(Debug, Deserialize)]
pub struct MarketListing {
    pub data: MarketData,
}

#[derive(Debug, Deserialize)]
pub struct MarketData {
    #[serde(rename = "cryptoCurrencyList")]
    pub crypto_currency_list: Vec<MarketEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MarketEntry {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "cmcRank")]
    pub cmc_rank: Option<i64>,
    pub rank: Option<i64>,
    pub quotes: Option<Vec<MarketQuote>>,
    #[serde(rename = "volume7d")]
    pub volume_7d: Option<f64>,
    #[serde(rename = "volume30d")]
    pub volume_30d: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MarketQuote {
    #[serde(rename = "volume24h")]
    pub volume_24h: Option<f64>,
    #[serde(rename = "volume7d")]
    pub volume_7d: Option<f64>,
    #[serde(rename = "volume30d")]
    pub volume_30d: Option<f64>,
}

// Exchange catalog (SimpleSwap currencies)

/// Either a bare array of currencies or an object wrapping it in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExchangeListing {
    Flat(Vec<ExchangeEntry>),
    Wrapped { data: Vec<ExchangeEntry> },
}

impl ExchangeListing {
    pub fn into_entries(self) -> Vec<ExchangeEntry> {
        match self {
            ExchangeListing::Flat(entries) => entries,
            ExchangeListing::Wrapped { data } => data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExchangeEntry {
    pub symbol: Option<String>,
}
