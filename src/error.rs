//! Classified failures for the rate provider layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Rate request failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Rate provider returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Malformed rate provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("No rate for currency pair: {base}/{target}")]
    MissingRate { base: String, target: String },
}
