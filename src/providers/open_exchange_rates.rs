use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::error::ProviderError;
use crate::rate_provider::RateProvider;

/// Client for the openexchangerates.org `latest.json` API. Returns a full
/// rates table for a base currency; pair lookups index into that table.
pub struct OpenExchangeRatesProvider {
    base_url: String,
    app_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LatestRates {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl OpenExchangeRatesProvider {
    pub fn new(base_url: &str, app_id: &str) -> Self {
        OpenExchangeRatesProvider {
            base_url: base_url.to_string(),
            app_id: app_id.to_string(),
        }
    }

    pub async fn latest_rates(&self, base: &str) -> Result<LatestRates, ProviderError> {
        let url = format!(
            "{}/api/latest.json?app_id={}&base={}",
            self.base_url, self.app_id, base
        );
        debug!(%base, "Requesting latest rates table");

        let client = reqwest::Client::builder().user_agent("fxconv/1.0").build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::UpstreamStatus(response.status()));
        }

        let text = response.text().await?;
        let data: LatestRates = serde_json::from_str(&text).inspect_err(|e| {
            error!(error = ?e, response = %text, "Failed to parse latest rates response");
        })?;

        Ok(data)
    }
}

#[async_trait]
impl RateProvider for OpenExchangeRatesProvider {
    async fn pair_rate(&self, base: &str, target: &str) -> Result<f64, ProviderError> {
        // Rates in the table are relative to the requested base.
        let table = self.latest_rates(base).await?;

        table
            .rates
            .get(target)
            .copied()
            .ok_or_else(|| ProviderError::MissingRate {
                base: base.to_string(),
                target: target.to_string(),
            })
    }
}
