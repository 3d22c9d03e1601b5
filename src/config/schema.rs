//! Configuration schema for Till
//!
//! Configuration is stored at `~/.config/till/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Catalog storage settings
    pub storage: StorageConfig,

    /// Currency display settings
    pub currency: CurrencyConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Catalog storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Catalog data file; the platform data dir is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

/// Currency display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Prefix shown before formatted amounts
    pub prefix: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            prefix: "Rp".to_string(),
        }
    }
}
