//! Configuration module
//!
//! Reads `config.toml`; every section falls back to its defaults when
//! omitted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::domain::{Customer, DomainResult};
use crate::support::errors::ConfigError;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    #[validate(nested)]
    pub pricing: PricingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "customer_pricing=debug"
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PricingConfig {
    /// Discount rate applied when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "discount rate must not be negative"))]
    pub discount_rate: Option<f64>,
}

impl AppConfig {
    /// Load and validate the configuration at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        debug!(
            path = %path.display(),
            discount_rate = ?config.pricing.discount_rate,
            "Config loaded"
        );
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Customer carrying the configured discount rate
    pub fn customer(&self) -> DomainResult<Customer> {
        Customer::with_discount_rate(self.pricing.discount_rate)
    }
}

/// `<config dir>/customer-pricing/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("customer-pricing")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "text");
        assert_eq!(cfg.pricing.discount_rate, None);
    }

    #[test]
    fn logging_format_json_is_case_insensitive() {
        let mut logging = LoggingConfig::default();
        assert!(!logging.is_json());
        logging.format = "JSON".to_string();
        assert!(logging.is_json());
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let cfg: AppConfig = toml::from_str("[pricing]\ndiscount_rate = 0.2\n").unwrap();
        assert_eq!(cfg.pricing.discount_rate, Some(0.2));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn customer_from_config() {
        let mut cfg = AppConfig::default();
        cfg.pricing.discount_rate = Some(0.2);
        let customer = cfg.customer().unwrap();
        assert_eq!(customer.apply_discount(100.0), Ok(80.0));
    }

    #[test]
    fn customer_from_invalid_config_fails() {
        let mut cfg = AppConfig::default();
        cfg.pricing.discount_rate = Some(-0.2);
        assert!(cfg.customer().is_err());
    }

    #[test]
    fn load_rejects_negative_discount_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pricing]\ndiscount_rate = -0.2\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pricing\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.logging.format = "json".to_string();
        cfg.pricing.discount_rate = Some(0.15);
        cfg.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.logging.format, "json");
        assert_eq!(loaded.pricing.discount_rate, Some(0.15));
    }

    #[test]
    fn save_without_discount_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        AppConfig::default().save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().pricing.discount_rate, None);
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("customer-pricing/config.toml"));
    }
}
