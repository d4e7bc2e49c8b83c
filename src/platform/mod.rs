//! Platform detection and resolution
//!
//! Maps the host OS/architecture onto an entry of the supported platform
//! table. Resolution is a linear scan with no fallback.

mod table;

pub use table::{PlatformEntry, SUPPORTED_PLATFORMS};

use tracing::debug;

/// OS type and architecture of the machine the hook runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub os_type: String,
    pub architecture: String,
}

impl HostPlatform {
    /// Create a host platform from explicit values
    pub fn new(os_type: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            os_type: os_type.into(),
            architecture: architecture.into(),
        }
    }

    /// Detect the current platform
    pub fn detect() -> Self {
        Self::from_rust_consts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Translate Rust's `std::env::consts` names into the table vocabulary
    pub fn from_rust_consts(os: &str, arch: &str) -> Self {
        let os_type = match os {
            "windows" => "Windows_NT",
            "linux" => "Linux",
            "macos" => "Darwin",
            other => other,
        };
        let architecture = match arch {
            "x86_64" => "x64",
            "aarch64" => "arm64",
            "x86" => "ia32",
            other => other,
        };
        Self::new(os_type, architecture)
    }

    /// Apply explicit overrides on top of this platform
    pub fn with_overrides(mut self, os_type: Option<String>, architecture: Option<String>) -> Self {
        if let Some(os_type) = os_type {
            self.os_type = os_type;
        }
        if let Some(architecture) = architecture {
            self.architecture = architecture;
        }
        self
    }
}

impl std::fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os_type, self.architecture)
    }
}

/// Lookup failure: the pair has no table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    pub os_type: String,
    pub architecture: String,
}

/// Find the table entry for an OS type and architecture
pub fn resolve(os_type: &str, architecture: &str) -> Result<&'static PlatformEntry, Unsupported> {
    let found = SUPPORTED_PLATFORMS
        .iter()
        .find(|entry| entry.matches(os_type, architecture));

    match found {
        Some(entry) => {
            debug!(
                "Resolved {}/{} to {}",
                os_type, architecture, entry.build_target
            );
            Ok(entry)
        }
        None => Err(Unsupported {
            os_type: os_type.to_string(),
            architecture: architecture.to_string(),
        }),
    }
}
