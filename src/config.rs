use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_EXCHANGE_RATE_API_URL: &str = "https://v6.exchangerate-api.com";
pub const DEFAULT_OPEN_EXCHANGE_RATES_URL: &str = "https://openexchangerates.org";

const EXCHANGE_RATE_API_KEY_VAR: &str = "EXCHANGERATE_API_KEY";
const OPEN_EXCHANGE_APP_ID_VAR: &str = "OPENEXCHANGERATES_APP_ID";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenExchangeRatesConfig {
    pub base_url: String,
    #[serde(default)]
    pub app_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchange_rate_api: Option<ExchangeRateApiConfig>,
    pub open_exchange_rates: Option<OpenExchangeRatesConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchange_rate_api: Some(ExchangeRateApiConfig {
                base_url: DEFAULT_EXCHANGE_RATE_API_URL.to_string(),
                api_key: None,
            }),
            open_exchange_rates: Some(OpenExchangeRatesConfig {
                base_url: DEFAULT_OPEN_EXCHANGE_RATES_URL.to_string(),
                app_id: None,
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn exchange_rate_api_url(&self) -> &str {
        self.providers
            .exchange_rate_api
            .as_ref()
            .map_or(DEFAULT_EXCHANGE_RATE_API_URL, |p| &p.base_url)
    }

    pub fn open_exchange_rates_url(&self) -> &str {
        self.providers
            .open_exchange_rates
            .as_ref()
            .map_or(DEFAULT_OPEN_EXCHANGE_RATES_URL, |p| &p.base_url)
    }

    /// Credential for exchangerate-api.com: config file first, then the
    /// `EXCHANGERATE_API_KEY` environment variable. Resolved once at startup.
    pub fn exchange_rate_api_key(&self) -> Result<String> {
        self.providers
            .exchange_rate_api
            .as_ref()
            .and_then(|p| p.api_key.clone())
            .or_else(|| env::var(EXCHANGE_RATE_API_KEY_VAR).ok())
            .with_context(|| {
                format!(
                    "No exchangerate-api credential: set providers.exchange_rate_api.api_key \
                     in the config file or the {EXCHANGE_RATE_API_KEY_VAR} environment variable"
                )
            })
    }

    /// Credential for openexchangerates.org: config file first, then the
    /// `OPENEXCHANGERATES_APP_ID` environment variable.
    pub fn open_exchange_app_id(&self) -> Result<String> {
        self.providers
            .open_exchange_rates
            .as_ref()
            .and_then(|p| p.app_id.clone())
            .or_else(|| env::var(OPEN_EXCHANGE_APP_ID_VAR).ok())
            .with_context(|| {
                format!(
                    "No openexchangerates credential: set providers.open_exchange_rates.app_id \
                     in the config file or the {OPEN_EXCHANGE_APP_ID_VAR} environment variable"
                )
            })
    }
}
