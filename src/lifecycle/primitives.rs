//! Capabilities the lifecycle manager delegates to
//!
//! Each lifecycle operation performs exactly one external I/O step
//! through one of these traits, which keeps the manager testable with
//! in-memory fakes.

use crate::error::DistResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Downloads a release archive and unpacks its executable
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url`, extract `executable_name` into `dest_dir` and return the
    /// executable's final path. An existing executable is overwritten.
    async fn fetch_and_extract(
        &self,
        url: &str,
        executable_name: &str,
        dest_dir: &Path,
    ) -> DistResult<PathBuf>;
}

/// Runs the cached executable as a child process
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Spawn `executable` with `args` and inherited stdio, wait for it and
    /// return its exit code
    async fn spawn(&self, executable: &Path, args: &[String]) -> DistResult<i32>;
}

/// Removes the cached executable
#[async_trait]
pub trait Remover: Send + Sync {
    /// Remove `executable` and its containing `cache_dir`. Missing targets
    /// are not an error.
    async fn remove_cached_binary(&self, executable: &Path, cache_dir: &Path) -> DistResult<()>;
}
