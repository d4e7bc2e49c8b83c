//! Supported platform table
//!
//! OS types and architectures use the vocabulary reported by Node's
//! `os.type()` and `os.arch()`, since the hosting package manager runs the
//! hooks under Node.

/// A prebuilt archive variant published for one OS/architecture pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformEntry {
    /// OS type, e.g. `Linux`, `Darwin`, `Windows_NT`
    pub os_type: &'static str,
    /// CPU architecture, e.g. `x64`
    pub architecture: &'static str,
    /// Rust target triple the archive was built for
    pub build_target: &'static str,
    /// File name of the executable inside the archive
    pub executable_name: &'static str,
}

impl PlatformEntry {
    /// Whether this entry serves the given OS type and architecture
    pub fn matches(&self, os_type: &str, architecture: &str) -> bool {
        self.os_type == os_type && self.architecture == architecture
    }
}

/// Every platform a release archive is published for, in lookup order.
/// `(os_type, architecture)` pairs are unique.
pub static SUPPORTED_PLATFORMS: [PlatformEntry; 3] = [
    PlatformEntry {
        os_type: "Windows_NT",
        architecture: "x64",
        build_target: "x86_64-pc-windows-msvc",
        executable_name: "git-ct.exe",
    },
    PlatformEntry {
        os_type: "Linux",
        architecture: "x64",
        build_target: "x86_64-unknown-linux-musl",
        executable_name: "git-ct",
    },
    PlatformEntry {
        os_type: "Darwin",
        architecture: "x64",
        build_target: "x86_64-apple-darwin",
        executable_name: "git-ct",
    },
];
