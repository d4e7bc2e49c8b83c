//! Child process launcher

use super::primitives::Spawner;
use crate::error::{DistError, DistResult};
use async_trait::async_trait;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Spawns the executable with the parent's stdin, stdout and stderr
#[derive(Debug, Default)]
pub struct ProcessSpawner;

impl ProcessSpawner {
    /// Create a new process spawner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Spawner for ProcessSpawner {
    async fn spawn(&self, executable: &Path, args: &[String]) -> DistResult<i32> {
        if !executable.is_file() {
            return Err(DistError::ExecutableNotFound(executable.to_path_buf()));
        }

        debug!("Executing: {} {:?}", executable.display(), args);

        let status = Command::new(executable)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| DistError::Spawn {
                path: executable.to_path_buf(),
                source: e,
            })?;

        let code = exit_code(status);
        debug!("{} exited with code {}", executable.display(), code);
        Ok(code)
    }
}

/// Numeric exit code of a finished child
///
/// A child killed by a signal reports `128 + signal`, as a shell would.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_executable_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("git-ct");

        let err = ProcessSpawner::new().spawn(&path, &[]).await.unwrap_err();
        match err {
            DistError::ExecutableNotFound(p) => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn directory_is_not_an_executable() {
        let temp = TempDir::new().unwrap();
        let err = ProcessSpawner::new().spawn(temp.path(), &[]).await.unwrap_err();
        assert!(matches!(err, DistError::ExecutableNotFound(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_codes_pass_through() {
        let spawner = ProcessSpawner::new();
        for expected in [0, 1, 42, 127, 255] {
            let args = vec!["-c".to_string(), format!("exit {expected}")];
            let code = spawner.spawn(Path::new("/bin/sh"), &args).await.unwrap();
            assert_eq!(code, expected);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn args_are_forwarded_verbatim() {
        let args = vec![
            "-c".to_string(),
            r#"[ "$1" = "--flag" ] && [ "$2" = "two words" ] && exit 7"#.to_string(),
            "sh".to_string(),
            "--flag".to_string(),
            "two words".to_string(),
        ];
        let code = ProcessSpawner::new()
            .spawn(Path::new("/bin/sh"), &args)
            .await
            .unwrap();
        assert_eq!(code, 7);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn signal_maps_to_shell_convention() {
        let args = vec!["-c".to_string(), "kill -TERM $$".to_string()];
        let code = ProcessSpawner::new()
            .spawn(Path::new("/bin/sh"), &args)
            .await
            .unwrap();
        assert_eq!(code, 128 + 15);
    }
}
