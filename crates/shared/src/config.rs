//! Application configuration management.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Prefix for environment overrides, e.g. `FINCALC__CALCULATOR__BASE_CURRENCY`.
const ENV_PREFIX: &str = "FINCALC";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Calculator configuration.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Calculator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Currency label that conversion amounts are denominated in.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Conversion factors keyed by target currency code.
    ///
    /// `None` keeps the built-in illustrative table.
    #[serde(default)]
    pub rates: Option<BTreeMap<String, Decimal>>,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            rates: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `FINCALC__*` environment variables. Both files are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration schema.
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
