//! Cached executable removal

use super::primitives::Remover;
use crate::error::{DistError, DistResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Deletes the executable and its cache directory from the filesystem
#[derive(Debug, Default)]
pub struct FsRemover;

impl FsRemover {
    /// Create a new filesystem remover
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Remover for FsRemover {
    async fn remove_cached_binary(&self, executable: &Path, cache_dir: &Path) -> DistResult<()> {
        match fs::remove_file(executable).await {
            Ok(()) => debug!("Removed {}", executable.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} already absent", executable.display())
            }
            Err(e) => {
                return Err(DistError::Deletion {
                    path: executable.to_path_buf(),
                    source: e,
                })
            }
        }

        match fs::remove_dir_all(cache_dir).await {
            Ok(()) => debug!("Removed {}", cache_dir.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(DistError::Deletion {
                    path: cache_dir.to_path_buf(),
                    source: e,
                })
            }
        }

        Ok(())
    }
}
