//! Release artifact location
//!
//! Builds the download URL of a platform's archive. The URL uses the
//! release-artifact version, which is tracked separately from the package
//! version and may differ from it.

use crate::manifest::PackageMetadata;
use crate::platform::PlatformEntry;

/// Version of the published release archives
pub const ARTIFACT_VERSION: &str = "0.0.4";

/// Download location and executable name for one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub download_url: String,
    pub executable_name: String,
}

/// Build the archive URL for a platform entry
///
/// `{repository}/releases/download/v{version}/{name}_v{version}_{target}.tar.gz`
pub fn locate_artifact(
    entry: &PlatformEntry,
    meta: &PackageMetadata,
    artifact_version: &str,
) -> ResolvedArtifact {
    let repository = meta.repository_url.trim_end_matches('/');
    let download_url = format!(
        "{repository}/releases/download/v{version}/{name}_v{version}_{target}.tar.gz",
        version = artifact_version,
        name = meta.name,
        target = entry.build_target,
    );

    ResolvedArtifact {
        download_url,
        executable_name: entry.executable_name.to_string(),
    }
}
