//! On-disk layout of the binary cache
//!
//! One directory per package, holding exactly one extracted executable:
//!
//! ```text
//! {root}/{package}/{executable}
//! ```
//!
//! The lifecycle manager is the only writer. There is no locking, so
//! overlapping install/uninstall calls against the same root race.

use crate::error::{DistError, DistResult};
use std::path::{Component, Path, PathBuf};

/// Cache directory layout rooted at a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    /// Create a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory owned by one package
    ///
    /// `package` must be a single plain path component; anything else
    /// would point at the root itself or outside it.
    pub fn package_dir(&self, package: &str) -> DistResult<PathBuf> {
        let mut components = Path::new(package).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == package => Ok(self.root.join(name)),
            _ => Err(DistError::InvalidPackageDir(package.to_string())),
        }
    }

    /// Location of the cached executable
    pub fn executable_path(&self, package: &str, executable_name: &str) -> DistResult<PathBuf> {
        Ok(self.package_dir(package)?.join(executable_name))
    }
}
