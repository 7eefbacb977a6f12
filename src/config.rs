use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use taste_tailor_cart::CheckoutPricing;
use taste_tailor_catalog::CuisineScope;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub checkout: CheckoutPricing,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub catalog_path: String,
    pub orders_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BrowseConfig {
    /// `narrow` (cuisine AND search) or `rebase` (cuisine replaces search)
    #[serde(default)]
    pub cuisine_scope: CuisineScope,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TASTE_TAILOR__DATA__CATALOG_PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("data.catalog_path", "data/catalog.json")?
            .set_default("data.orders_path", "data/orders.json")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TASTE_TAILOR")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.data.catalog_path.trim().is_empty() {
            return Err("data.catalog_path must not be empty".to_string());
        }
        if self.data.orders_path.trim().is_empty() {
            return Err("data.orders_path must not be empty".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                self.logging.format
            ));
        }
        if self.checkout.delivery_fee.is_nan() || self.checkout.delivery_fee < 0.0 {
            return Err("checkout.delivery_fee must not be negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.checkout.vat_rate) {
            return Err("checkout.vat_rate must be between 0 and 1".to_string());
        }
        Ok(())
    }
}
