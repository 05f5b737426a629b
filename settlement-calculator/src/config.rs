//! Configuration for the settlement calculator

use crate::netting::DEFAULT_PLACEHOLDER_PREFIX;
use serde::{Deserialize, Serialize};

/// Settlement calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Participant labelling
    pub labels: LabelConfig,

    /// Report rendering
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "settlement-calculator".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            labels: LabelConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Participant labelling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Prefix for unnamed participants, followed by their 1-based position
    pub placeholder_prefix: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
        }
    }
}

/// Report rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Currency symbol appended to amounts
    pub currency_symbol: String,

    /// Separator between payer and payee
    pub arrow: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            arrow: "→".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("SETTLEMENT_PLACEHOLDER_PREFIX") {
            config.labels.placeholder_prefix = prefix;
        }

        if let Ok(symbol) = std::env::var("SETTLEMENT_CURRENCY_SYMBOL") {
            config.report.currency_symbol = symbol;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce unusable labels
    pub fn validate(&self) -> crate::Result<()> {
        if self.labels.placeholder_prefix.trim().is_empty() {
            return Err(crate::Error::Config(
                "placeholder_prefix must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.labels.placeholder_prefix, "Participant");
        assert_eq!(config.report.currency_symbol, "€");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [labels]
            placeholder_prefix = "Spieler"
            "#,
        )
        .unwrap();

        assert_eq!(config.labels.placeholder_prefix, "Spieler");
        assert_eq!(config.report.currency_symbol, "€");
        assert_eq!(config.service_name, "settlement-calculator");
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let result = Config::from_toml_str(
            r#"
            [labels]
            placeholder_prefix = "  "
            "#,
        );
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(Config::from_toml_str("labels = 3").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settlement.toml");
        std::fs::write(&path, "[report]\ncurrency_symbol = \"USD\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.report.currency_symbol, "USD");
        assert_eq!(config.report.arrow, "→");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/settlement.toml");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
