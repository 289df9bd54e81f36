use crate::error::{Result, StockpadError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Configuration for stockpad, stored as config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockpadConfig {
    /// Quantity below which a product is flagged as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for StockpadConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StockpadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockpadError::Io)?;
        let config: StockpadConfig =
            serde_json::from_str(&content).map_err(StockpadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockpadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockpadError::Serialization)?;
        fs::write(config_path, content).map_err(StockpadError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StockpadConfig::default();
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StockpadConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, StockpadConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = StockpadConfig {
            low_stock_threshold: 12,
        };
        config.save(dir.path()).unwrap();

        let loaded = StockpadConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.low_stock_threshold, 12);
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let parsed: StockpadConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.low_stock_threshold, 5);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = StockpadConfig {
            low_stock_threshold: 2,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StockpadConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
