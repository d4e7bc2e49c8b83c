//! Release archive download and extraction
//!
//! The archive is streamed straight from the HTTP body through gzip and
//! tar; nothing but the executable is written to disk. The executable is
//! first extracted into a staging directory next to its destination, then
//! renamed into place, so a failed download never leaves a truncated
//! binary behind.

use super::primitives::Fetcher;
use crate::error::{DistError, DistResult};
use crate::ui::{DownloadProgress, UiContext};
use async_trait::async_trait;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Downloads release archives over HTTPS
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    ui: UiContext,
}

impl HttpFetcher {
    /// Create a fetcher that reports progress through `ui`
    pub fn new(ui: &UiContext) -> Self {
        Self { ui: ui.clone() }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_and_extract(
        &self,
        url: &str,
        executable_name: &str,
        dest_dir: &Path,
    ) -> DistResult<PathBuf> {
        let url = url.to_string();
        let executable_name = executable_name.to_string();
        let dest_dir = dest_dir.to_path_buf();
        let ui = self.ui.clone();

        // ureq is blocking
        tokio::task::spawn_blocking(move || download(&ui, &url, &executable_name, &dest_dir))
            .await
            .map_err(|e| DistError::Internal(format!("Download task failed: {}", e)))?
    }
}

fn download(
    ui: &UiContext,
    url: &str,
    executable_name: &str,
    dest_dir: &Path,
) -> DistResult<PathBuf> {
    info!("Downloading {}", url);

    let response = ureq::get(url).call().map_err(|e| DistError::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let total = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    debug!("Content-Length: {:?}", total);

    let progress = DownloadProgress::new(ui, executable_name, total);
    let body = progress.wrap(response.into_body().into_reader());
    let result = install_from_archive(body, executable_name, dest_dir);
    progress.finish();
    result
}

/// Extract `executable_name` from a gzipped tarball into `dest_dir`,
/// replacing any existing file of that name
pub fn install_from_archive<R: Read>(
    reader: R,
    executable_name: &str,
    dest_dir: &Path,
) -> DistResult<PathBuf> {
    fs::create_dir_all(dest_dir)
        .map_err(|e| DistError::io(format!("creating directory {}", dest_dir.display()), e))?;

    let staging = tempfile::Builder::new()
        .prefix(".staging-")
        .tempdir_in(dest_dir)
        .map_err(|e| DistError::io("creating staging directory", e))?;

    let staged = extract_executable(reader, executable_name, staging.path())?;
    let target = dest_dir.join(executable_name);
    fs::rename(&staged, &target)
        .map_err(|e| DistError::io(format!("moving executable to {}", target.display()), e))?;

    info!("Installed {}", target.display());
    Ok(target)
}

/// Find the entry named `executable_name` at any depth of the archive and
/// write it to `out_dir`
///
/// Links, absolute paths and paths containing `..` are skipped.
fn extract_executable<R: Read>(
    reader: R,
    executable_name: &str,
    out_dir: &Path,
) -> DistResult<PathBuf> {
    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    let entries = archive
        .entries()
        .map_err(|e| DistError::extract(format!("reading archive: {}", e)))?;

    for entry in entries {
        let mut entry =
            entry.map_err(|e| DistError::extract(format!("reading archive entry: {}", e)))?;
        let entry_type = entry.header().entry_type();

        if entry_type.is_symlink() || entry_type.is_hard_link() {
            warn!("Skipping link in archive");
            continue;
        }
        if !entry_type.is_file() {
            continue;
        }

        let path = entry
            .path()
            .map_err(|e| DistError::extract(format!("invalid entry path: {}", e)))?
            .into_owned();

        if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
            warn!("Skipping unsafe path in archive: {}", path.display());
            continue;
        }

        if path.file_name().and_then(|n| n.to_str()) != Some(executable_name) {
            debug!("Skipping {}", path.display());
            continue;
        }

        let out_path = out_dir.join(executable_name);
        let mut file = File::create(&out_path)
            .map_err(|e| DistError::io(format!("creating {}", out_path.display()), e))?;
        io::copy(&mut entry, &mut file)
            .map_err(|e| DistError::extract(format!("unpacking {}: {}", path.display(), e)))?;
        drop(file);

        set_executable(&out_path)?;
        debug!("Extracted {} from {}", executable_name, path.display());
        return Ok(out_path);
    }

    Err(DistError::extract(format!(
        "archive does not contain {}",
        executable_name
    )))
}

#[cfg(unix)]
fn set_executable(path: &Path) -> DistResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| DistError::io(format!("setting permissions on {}", path.display()), e))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> DistResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::TempDir;

    /// Build a .tar.gz in memory from (path, contents) pairs
    fn tarball(files: &[(&str, &[u8])]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_entry_type(tar::EntryType::Regular);
            header.set_cksum();
            builder.append_data(&mut header, path, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn extracts_top_level_executable() {
        let temp = TempDir::new().unwrap();
        let archive = tarball(&[("README.md", b"docs"), ("git-ct", b"#!bin")]);

        let path = install_from_archive(&archive[..], "git-ct", temp.path()).unwrap();

        assert_eq!(path, temp.path().join("git-ct"));
        assert_eq!(fs::read(&path).unwrap(), b"#!bin");
        assert!(!temp.path().join("README.md").exists());
    }

    #[test]
    fn extracts_nested_executable() {
        let temp = TempDir::new().unwrap();
        let archive = tarball(&[("git-ct_v0.0.4/git-ct.exe", b"MZ")]);

        let path = install_from_archive(&archive[..], "git-ct.exe", temp.path()).unwrap();
        assert_eq!(path, temp.path().join("git-ct.exe"));
        assert_eq!(fs::read(&path).unwrap(), b"MZ");
    }

    #[test]
    fn overwrites_existing_executable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("git-ct"), b"stale").unwrap();
        let archive = tarball(&[("git-ct", b"fresh")]);

        install_from_archive(&archive[..], "git-ct", temp.path()).unwrap();

        assert_eq!(fs::read(temp.path().join("git-ct")).unwrap(), b"fresh");
    }

    #[test]
    fn leaves_only_the_executable_behind() {
        let temp = TempDir::new().unwrap();
        let archive = tarball(&[("git-ct", b"bin")]);

        install_from_archive(&archive[..], "git-ct", temp.path()).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("git-ct")]);
    }

    #[cfg(unix)]
    #[test]
    fn marks_executable() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let archive = tarball(&[("git-ct", b"bin")]);

        let path = install_from_archive(&archive[..], "git-ct", temp.path()).unwrap();
        let mode = fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn missing_executable_is_an_extract_error() {
        let temp = TempDir::new().unwrap();
        let archive = tarball(&[("other-tool", b"bin")]);

        let err = install_from_archive(&archive[..], "git-ct", temp.path()).unwrap_err();
        assert!(matches!(err, DistError::Extract { .. }));
        assert!(!temp.path().join("git-ct").exists());
    }

    #[test]
    fn garbage_is_an_extract_error() {
        let temp = TempDir::new().unwrap();
        let err = install_from_archive(&b"not a tarball"[..], "git-ct", temp.path()).unwrap_err();
        assert!(matches!(err, DistError::Extract { .. }));
    }

    #[test]
    fn skips_parent_dir_entries() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("pkg");

        // tar::Builder refuses `..` paths, so write the name into the header directly
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let data: &[u8] = b"evil";
        let mut header = tar::Header::new_gnu();
        header.as_gnu_mut().unwrap().name[..9].copy_from_slice(b"../git-ct");
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        header.set_cksum();
        builder.append(&header, data).unwrap();
        let archive = builder.into_inner().unwrap().finish().unwrap();

        let err = install_from_archive(&archive[..], "git-ct", &dest).unwrap_err();
        assert!(matches!(err, DistError::Extract { .. }));
        assert!(!temp.path().join("git-ct").exists());
    }
}
