//! Package metadata provider
//!
//! Reads the name, version and repository of the distributed package from
//! an npm `package.json`, falling back to built-in values.

use crate::error::{DistError, DistResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Built-in package name
pub const DEFAULT_NAME: &str = "git-ct";

/// Built-in repository URL
pub const DEFAULT_REPOSITORY: &str = "https://github.com/emi2k01/git-ct";

/// Static metadata of the distributed package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    /// Package version. Not used for artifact URLs.
    pub version: String,
    pub repository_url: String,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: String,
    version: String,
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Repository {
    Url(String),
    Object { url: String },
}

impl Repository {
    fn url(&self) -> &str {
        match self {
            Repository::Url(url) | Repository::Object { url } => url,
        }
    }
}

impl PackageMetadata {
    /// Metadata compiled into this binary
    pub fn bundled() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            repository_url: DEFAULT_REPOSITORY.to_string(),
        }
    }

    /// Parse metadata from `package.json` contents
    pub fn from_json(content: &str, path: &Path) -> DistResult<Self> {
        let invalid = |reason: String| DistError::ManifestInvalid {
            path: path.to_path_buf(),
            reason,
        };

        let pkg: PackageJson = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
        let repository = pkg
            .repository
            .ok_or_else(|| invalid("missing \"repository\" field".to_string()))?;
        let repository_url = normalize_repository_url(repository.url());
        if repository_url.is_empty() {
            return Err(invalid("empty repository url".to_string()));
        }
        validate_name(&pkg.name).map_err(invalid)?;

        Ok(Self {
            name: pkg.name,
            version: pkg.version,
            repository_url,
        })
    }

    /// Name of the package's cache directory
    ///
    /// Scoped names map to one path component: `@scope/name` becomes
    /// `@scope+name`.
    pub fn cache_dir_name(&self) -> String {
        self.name.replacen('/', "+", 1)
    }

    /// Load metadata from a `package.json` file
    pub async fn from_package_json(path: &Path) -> DistResult<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DistError::io(format!("reading manifest {}", path.display()), e))?;
        let meta = Self::from_json(&content, path)?;
        debug!(
            "Loaded {} {} from {}",
            meta.name,
            meta.version,
            path.display()
        );
        Ok(meta)
    }

    /// Load metadata from the first manifest found, or use the bundled values
    ///
    /// An explicit path must exist. Otherwise `./package.json` is used when
    /// present.
    pub async fn discover(explicit: Option<&Path>, cwd: &Path) -> DistResult<Self> {
        if let Some(path) = explicit {
            return Self::from_package_json(path).await;
        }

        let local: PathBuf = cwd.join("package.json");
        if local.is_file() {
            return Self::from_package_json(&local).await;
        }

        debug!("No package.json found, using bundled metadata");
        Ok(Self::bundled())
    }
}

/// Accept `name` or `@scope/name` where every part is a plain file name
fn validate_name(name: &str) -> Result<(), String> {
    let parts: Vec<&str> = match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, base)) => vec![scope, base],
            None => return Err(format!("scoped package name {name:?} has no '/'")),
        },
        None => vec![name],
    };

    for part in parts {
        if part.is_empty() || part == "." || part == ".." || part.contains(['/', '\\']) {
            return Err(format!("package name {name:?} is not a valid directory name"));
        }
    }
    Ok(())
}

/// Turn npm repository forms into a plain https URL
fn normalize_repository_url(raw: &str) -> String {
    let url = raw.trim();
    let url = url.strip_prefix("git+").unwrap_or(url);
    let url = url.strip_suffix(".git").unwrap_or(url);
    let url = url.trim_end_matches('/');

    if let Some(slug) = url.strip_prefix("github:") {
        return format!("https://github.com/{slug}");
    }
    // "owner/repo" shorthand
    if !url.contains(':') && url.matches('/').count() == 1 {
        return format!("https://github.com/{url}");
    }
    url.to_string()
}
