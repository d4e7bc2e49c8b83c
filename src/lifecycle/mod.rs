//! Binary lifecycle: install, run and uninstall
//!
//! The only persisted state is the cached executable itself, so the
//! manager keeps no state machine in memory. Presence is read from disk
//! when needed. Every operation starts by resolving the platform and
//! locating the artifact; nothing resolved is kept between calls.
//!
//! | Operation | From | To |
//! |-----------|------|----|
//! | install | Absent, Present | Present (always re-fetched) |
//! | run | Present | Present |
//! | uninstall | Absent, Present | Absent |

mod fetch;
mod primitives;
mod remove;
mod spawn;

pub use fetch::{install_from_archive, HttpFetcher};
pub use primitives::{Fetcher, Remover, Spawner};
pub use remove::FsRemover;
pub use spawn::ProcessSpawner;

use crate::artifact::{locate_artifact, ResolvedArtifact};
use crate::cache::CacheLayout;
use crate::error::{DistError, DistResult};
use crate::manifest::PackageMetadata;
use crate::platform::{self, HostPlatform, PlatformEntry, SUPPORTED_PLATFORMS};
use crate::ui::{render_platform_table, UiContext};
use std::path::PathBuf;
use tracing::{debug, info};

/// Snapshot of what the lifecycle operations would act on
#[derive(Debug, Clone)]
pub struct BinaryStatus {
    pub platform: &'static PlatformEntry,
    pub artifact: ResolvedArtifact,
    pub executable: PathBuf,
    pub present: bool,
}

/// Owns the cached executable of one package
pub struct BinaryManager {
    host: HostPlatform,
    package: PackageMetadata,
    artifact_version: String,
    cache: CacheLayout,
    fetcher: Box<dyn Fetcher>,
    spawner: Box<dyn Spawner>,
    remover: Box<dyn Remover>,
}

impl BinaryManager {
    /// Create a manager backed by HTTP download, process spawn and
    /// filesystem removal
    pub fn new(
        host: HostPlatform,
        package: PackageMetadata,
        artifact_version: impl Into<String>,
        cache: CacheLayout,
        ui: &UiContext,
    ) -> Self {
        Self {
            host,
            package,
            artifact_version: artifact_version.into(),
            cache,
            fetcher: Box::new(HttpFetcher::new(ui)),
            spawner: Box::new(ProcessSpawner::new()),
            remover: Box::new(FsRemover::new()),
        }
    }

    /// Replace the download primitive
    pub fn with_fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replace the spawn primitive
    pub fn with_spawner(mut self, spawner: Box<dyn Spawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Replace the delete primitive
    pub fn with_remover(mut self, remover: Box<dyn Remover>) -> Self {
        self.remover = remover;
        self
    }

    /// Package this manager distributes
    pub fn package(&self) -> &PackageMetadata {
        &self.package
    }

    /// Platform the manager resolves against
    pub fn host(&self) -> &HostPlatform {
        &self.host
    }

    /// Release artifact version used for download URLs
    pub fn artifact_version(&self) -> &str {
        &self.artifact_version
    }

    /// Download and unpack the executable for this platform
    ///
    /// Always re-fetches; an installed executable is replaced.
    pub async fn install(&self) -> DistResult<PathBuf> {
        let artifact = self.locate()?;
        let dest_dir = self.cache.package_dir(&self.package.cache_dir_name())?;

        info!(
            "Installing {} for {} from {}",
            self.package.name, self.host, artifact.download_url
        );
        self.fetcher
            .fetch_and_extract(&artifact.download_url, &artifact.executable_name, &dest_dir)
            .await
    }

    /// Run the installed executable and return its exit code
    ///
    /// Never installs on demand.
    pub async fn run(&self, args: &[String]) -> DistResult<i32> {
        let artifact = self.locate()?;
        let executable = self
            .cache
            .executable_path(&self.package.cache_dir_name(), &artifact.executable_name)?;

        debug!("Running {}", executable.display());
        self.spawner.spawn(&executable, args).await
    }

    /// Remove the installed executable and its cache directory
    pub async fn uninstall(&self) -> DistResult<()> {
        let entry = self.resolve()?;
        let dir = self.cache.package_dir(&self.package.cache_dir_name())?;
        let executable = dir.join(entry.executable_name);

        info!("Uninstalling {}", executable.display());
        self.remover.remove_cached_binary(&executable, &dir).await
    }

    /// Describe the resolved platform, artifact and cache state
    pub fn status(&self) -> DistResult<BinaryStatus> {
        let platform = self.resolve()?;
        let artifact = locate_artifact(platform, &self.package, &self.artifact_version);
        let executable = self
            .cache
            .executable_path(&self.package.cache_dir_name(), &artifact.executable_name)?;
        let present = executable.is_file();

        Ok(BinaryStatus {
            platform,
            artifact,
            executable,
            present,
        })
    }

    fn resolve(&self) -> DistResult<&'static PlatformEntry> {
        platform::resolve(&self.host.os_type, &self.host.architecture).map_err(|unsupported| {
            DistError::UnsupportedPlatform {
                os_type: unsupported.os_type,
                architecture: unsupported.architecture,
                package: self.package.name.clone(),
                table: render_platform_table(&SUPPORTED_PLATFORMS),
            }
        })
    }

    fn locate(&self) -> DistResult<ResolvedArtifact> {
        let entry = self.resolve()?;
        Ok(locate_artifact(entry, &self.package, &self.artifact_version))
    }
}
