//! Configuration management for Till

pub mod schema;

pub use schema::Config;

use crate::error::{TillError, TillResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("till")
            .join("config.toml")
    }

    /// Get the data directory path
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("till")
    }

    /// Get the default catalog data file path
    pub fn default_data_file() -> PathBuf {
        Self::data_dir().join("catalog.json")
    }

    /// Resolve the catalog data file: CLI flag first, then the config
    /// override, then the platform default.
    pub fn data_file(config: &Config, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(ref path) = config.storage.data_file {
            return path.clone();
        }
        Self::default_data_file()
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load(&self) -> TillResult<Config> {
        if !self.config_path.exists() {
            debug!("config file not found, using defaults");
            return Ok(Config::default());
        }
        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> TillResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| TillError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| TillError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub fn save(&self, config: &Config) -> TillResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| TillError::DirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| {
            TillError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
