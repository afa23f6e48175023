//! Turns a provider rate into a converted amount.

use crate::error::ProviderError;
use crate::rate_provider::RateProvider;
use tracing::debug;

/// Outcome of a single conversion. `rate` is the unrounded provider rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub converted_amount: f64,
    pub rate: f64,
}

/// Rounds to two decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub async fn convert(
    provider: &dyn RateProvider,
    base: &str,
    target: &str,
    amount: f64,
) -> Result<Conversion, ProviderError> {
    let rate = provider.pair_rate(base, target).await?;
    debug!(%base, %target, rate, "Received conversion rate");

    Ok(Conversion {
        converted_amount: round_to_cents(amount * rate),
        rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubProvider {
        rate: Option<f64>,
    }

    #[async_trait]
    impl RateProvider for StubProvider {
        async fn pair_rate(&self, base: &str, target: &str) -> Result<f64, ProviderError> {
            self.rate.ok_or_else(|| ProviderError::MissingRate {
                base: base.to_string(),
                target: target.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_convert_rounds_amount_and_keeps_raw_rate() {
        let provider = StubProvider { rate: Some(0.92) };

        let result = convert(&provider, "USD", "EUR", 100.0).await.unwrap();
        assert_eq!(result.converted_amount, 92.00);
        assert_eq!(result.rate, 0.92);
    }

    #[tokio::test]
    async fn test_convert_with_fractional_rate() {
        let provider = StubProvider { rate: Some(149.837) };

        let result = convert(&provider, "USD", "JPY", 50.0).await.unwrap();
        assert_eq!(result.converted_amount, 7491.85);
        assert_eq!(result.rate, 149.837);
    }

    #[tokio::test]
    async fn test_convert_zero_amount() {
        let provider = StubProvider { rate: Some(1.0834) };

        let result = convert(&provider, "EUR", "USD", 0.0).await.unwrap();
        assert_eq!(result.converted_amount, 0.0);
        assert_eq!(result.rate, 1.0834);
    }

    #[tokio::test]
    async fn test_convert_missing_rate_propagates() {
        let provider = StubProvider { rate: None };

        let result = convert(&provider, "USD", "EUR", 100.0).await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No rate for currency pair: USD/EUR"
        );
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(round_to_cents(10.0 * 1.005), 10.05);
        // 0.125 is exactly representable, so this is a true half-cent case.
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(1.444), 1.44);
        assert_eq!(round_to_cents(1.446), 1.45);
    }
}
