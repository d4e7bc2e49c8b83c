//! Configuration schema for git-ct-dist
//!
//! Configuration is stored at `~/.config/git-ct-dist/config.toml`

use crate::artifact::ARTIFACT_VERSION;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Release artifact settings
    pub release: ReleaseConfig,

    /// Binary cache settings
    pub cache: CacheConfig,

    /// Package metadata settings
    pub package: PackageConfig,
}

/// Release artifact settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Version of the release archives to download. Independent of the
    /// package version.
    pub artifact_version: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            artifact_version: ARTIFACT_VERSION.to_string(),
        }
    }
}

/// Binary cache settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Root directory holding one subdirectory per package
    pub dir: Option<PathBuf>,
}

/// Package metadata settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Path to the package.json describing the distributed package
    pub manifest: Option<PathBuf>,
}
