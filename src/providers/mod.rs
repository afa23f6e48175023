pub mod exchange_rate_api;
pub mod open_exchange_rates;
