// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("coin-gap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::retrieval("<client>", e))?;

        Ok(Self { client })
    }

    /// GET `url` once and parse the body as JSON. No retries.
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::retrieval(url, format!("request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::retrieval(url, format!("failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(Error::retrieval(url, format!("HTTP {}", status)));
        }

        debug!(url, bytes = text.len(), "catalog fetched");
        serde_json::from_str(&text)
            .map_err(|e| Error::retrieval(url, format!("body is not JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_json_parses_body() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v3/currencies");
                then.status(200)
                    .json_body(json!([{ "symbol": "btc" }, { "symbol": "eth" }]));
            })
            .await;

        let client = CatalogClient::new()?;
        let payload = client.fetch_json(&server.url("/v3/currencies")).await?;

        mock.assert_async().await;
        assert_eq!(payload[1]["symbol"], "eth");
        Ok(())
    }

    #[tokio::test]
    async fn test_non_success_status_is_retrieval_error() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/listing");
                then.status(503).body("{\"status\": \"down\"}");
            })
            .await;

        let client = CatalogClient::new()?;
        let err = client.fetch_json(&server.url("/listing")).await.unwrap_err();

        assert!(matches!(err, Error::Retrieval { .. }));
        assert!(err.to_string().contains("503"));
        Ok(())
    }

    #[tokio::test]
    async fn test_non_json_body_is_retrieval_error() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/listing");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = CatalogClient::new()?;
        let err = client.fetch_json(&server.url("/listing")).await.unwrap_err();

        assert!(matches!(err, Error::Retrieval { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_host_is_retrieval_error() -> Result<()> {
        let client = CatalogClient::new()?;
        let err = client
            .fetch_json("http://127.0.0.1:1/listing")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Retrieval { .. }));
        Ok(())
    }
}
