// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "COIN_GAP_CONFIG";

const CMC_LISTING_URL: &str = "https://api.coinmarketcap.com/data-api/v3/cryptocurrency/listing?start=1&limit=1500&sortBy=market_cap&sortType=desc&convert=USD,BTC,ETH&cryptoType=all&tagType=all&audited=false&aux=ath,atl,high24h,low24h,num_market_pairs,cmc_rank,date_added,max_supply,circulating_supply,total_supply,volume_7d,volume_30d,self_reported_circulating_supply,self_reported_market_cap";
const SIMPLESWAP_CURRENCIES_URL: &str =
    "https://simpleswap.io/api/v3/currencies?fixed=false&includeDisabled=false";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub market_url: String,
    pub exchange_url: String,
    pub data_dir: PathBuf,
    pub database_file: String,
    pub snapshot_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            market_url: CMC_LISTING_URL.to_string(),
            exchange_url: SIMPLESWAP_CURRENCIES_URL.to_string(),
            data_dir: PathBuf::from("data"),
            database_file: "crypto_data.db".to_string(),
            snapshot_file: "missing_coins.csv".to_string(),
        }
    }
}

impl Config {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }
}

fn get_config_path() -> PathBuf {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Load the config file, or the defaults when there is none
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = load_config_from(&dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.database_path(), Path::new("data/crypto_data.db"));
        assert_eq!(config.snapshot_path(), Path::new("data/missing_coins.csv"));
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "data_dir = \"/var/lib/coin-gap\"\nsnapshot_file = \"gap.csv\"\n",
        )?;

        let config = load_config_from(&path)?;

        assert_eq!(config.snapshot_path(), Path::new("/var/lib/coin-gap/gap.csv"));
        assert_eq!(config.market_url, Config::default().market_url);
        assert_eq!(config.database_file, "crypto_data.db");
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = [1, 2")?;

        assert!(load_config_from(&path).is_err());
        Ok(())
    }
}
