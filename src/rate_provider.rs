//! Currency conversion abstractions

use crate::error::ProviderError;
use async_trait::async_trait;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Rate such that `amount_in_target = amount_in_base * rate`.
    ///
    /// Currency codes are forwarded to the upstream API uninterpreted; the
    /// provider is the sole source of truth for their validity.
    async fn pair_rate(&self, base: &str, target: &str) -> Result<f64, ProviderError>;
}
