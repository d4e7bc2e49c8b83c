//! Configuration management for git-ct-dist

pub mod schema;

pub use schema::Config;

use crate::error::{DistError, DistResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Application directory name under the user's config and cache dirs
const APP_DIR: &str = "git-ct-dist";

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
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Get the default cache root, a directory owned by this tool
    pub fn default_cache_root() -> DistResult<PathBuf> {
        dirs::cache_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(DistError::NoCacheDir)
    }

    /// Load configuration, using defaults if the file does not exist
    pub async fn load(&self) -> DistResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> DistResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DistError::io(format!("reading config from {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| DistError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        validate(&config, path)?;
        Ok(config)
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

/// Check values that TOML parsing alone does not catch
fn validate(config: &Config, path: &Path) -> DistResult<()> {
    semver::Version::parse(&config.release.artifact_version).map_err(|e| {
        DistError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: format!(
                "release.artifact_version '{}' is not a valid version: {}",
                config.release.artifact_version, e
            ),
        }
    })?;
    Ok(())
}
