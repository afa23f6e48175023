use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ProviderError;
use crate::rate_provider::RateProvider;

/// Pair-lookup client for the exchangerate-api.com v6 API.
///
/// Credentials are resolved once at startup and held for the lifetime of the
/// provider; nothing is read from the environment per call.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    // Absent on upstream error bodies, which still arrive with a 2xx-shaped
    // JSON document in some deployments.
    conversion_rate: Option<f64>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn pair_rate(&self, base: &str, target: &str) -> Result<f64, ProviderError> {
        let url = format!("{}/v6/{}/pair/{}/{}", self.base_url, self.api_key, base, target);
        debug!(%base, %target, "Requesting pair rate");

        let client = reqwest::Client::builder().user_agent("fxconv/1.0").build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::UpstreamStatus(response.status()));
        }

        let text = response.text().await?;
        let data: PairResponse = serde_json::from_str(&text).inspect_err(|e| {
            error!(error = ?e, response = %text, "Failed to parse pair rate response");
        })?;

        data.conversion_rate.ok_or_else(|| ProviderError::MissingRate {
            base: base.to_string(),
            target: target.to_string(),
        })
    }
}
