//! Error types for git-ct-dist
//!
//! All modules use `DistResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for git-ct-dist operations
pub type DistResult<T> = Result<T, DistError>;

/// All errors that can occur while installing, running or removing the binary
#[derive(Error, Debug)]
pub enum DistError {
    // Platform errors
    #[error(
        "Platform with type \"{os_type}\" and architecture \"{architecture}\" is not supported by {package}.\nYour system must be one of the following:\n\n{table}"
    )]
    UnsupportedPlatform {
        os_type: String,
        architecture: String,
        package: String,
        table: String,
    },

    // Fetch errors
    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Failed to extract archive: {reason}")]
    Extract { reason: String },

    // Spawn errors
    #[error("Executable not found: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("Failed to launch {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Deletion errors
    #[error("Failed to remove {}: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Invalid package manifest at {path}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("Package name {0:?} cannot be used as a cache directory")]
    InvalidPackageDir(String),

    #[error("Could not determine the user cache directory")]
    NoCacheDir,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure category of a [`DistError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Current OS/architecture has no platform table entry
    UnsupportedPlatform,
    /// Network or archive failure during install
    Fetch,
    /// Cached executable missing or not invocable during run
    Spawn,
    /// Filesystem failure while removing the cached executable
    Deletion,
    /// Configuration, manifest or other environment failure
    Environment,
}

impl DistError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an extraction error
    pub fn extract(reason: impl Into<String>) -> Self {
        Self::Extract {
            reason: reason.into(),
        }
    }

    /// Category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedPlatform { .. } => ErrorKind::UnsupportedPlatform,
            Self::Download { .. } | Self::Extract { .. } => ErrorKind::Fetch,
            Self::ExecutableNotFound(_) | Self::Spawn { .. } => ErrorKind::Spawn,
            Self::Deletion { .. } => ErrorKind::Deletion,
            _ => ErrorKind::Environment,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ExecutableNotFound(_) => Some("Run: git-ct-dist install"),
            Self::Download { .. } => Some("Check your network connection and retry the install"),
            Self::Deletion { .. } => Some("Check permissions on the cache directory"),
            Self::NoCacheDir => Some("Pass --cache-dir or set cache.dir in the config file"),
            _ => None,
        }
    }
}
