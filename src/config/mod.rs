//! Configuration management for gomarket

pub mod schema;

pub use schema::{Config, LogFormat};

use crate::error::{GomarketError, GomarketResult};
use std::path::{Path, PathBuf};
use tokio::fs;
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
            .join("gomarket")
            .join("config.toml")
    }

    /// Get the default data directory path
    pub fn default_data_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gomarket")
    }

    /// Resolve the data directory: explicit override, then config, then default
    pub fn data_dir(override_dir: Option<&Path>, config: &Config) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| config.storage.data_dir.clone())
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Directory holding the key-value files
    pub fn store_dir(data_dir: &Path) -> PathBuf {
        data_dir.join("store")
    }

    /// Path of the audit journal
    pub fn audit_log_path(data_dir: &Path) -> PathBuf {
        data_dir.join("audit.log")
    }

    /// Load configuration, using defaults if the file does not exist
    pub async fn load(&self) -> GomarketResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> GomarketResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| GomarketError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| GomarketError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> GomarketResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            GomarketError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> GomarketResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| GomarketError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Ensure the data and store directories exist
    pub async fn ensure_data_dirs(data_dir: &Path) -> GomarketResult<()> {
        let dirs = [data_dir.to_path_buf(), Self::store_dir(data_dir)];

        for dir in &dirs {
            fs::create_dir_all(dir).await.map_err(|e| {
                GomarketError::io(format!("creating directory {}", dir.display()), e)
            })?;
        }

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
