//! Integration tests for git-ct-dist

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn dist() -> Command {
        cargo_bin_cmd!("git-ct-dist")
    }

    /// Command isolated from the user's config, cache and package.json
    fn isolated(temp: &TempDir, os_type: &str, arch: &str) -> Command {
        let mut cmd = dist();
        cmd.current_dir(temp.path())
            .env_remove("GIT_CT_DIST_MANIFEST")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--cache-dir")
            .arg(temp.path().join("cache"))
            .args(["--os-type", os_type, "--arch", arch]);
        cmd
    }

    fn write_package_named(dir: &Path, name: &str) {
        std::fs::write(
            dir.join("package.json"),
            format!(r#"{{"name":{name:?},"version":"1.0.0","repository":"org/repo"}}"#),
        )
        .unwrap();
    }

    fn write_package_json(dir: &Path, version: &str) {
        std::fs::write(
            dir.join("package.json"),
            format!(
                r#"{{"name":"git-ct","version":"{version}","repository":{{"type":"git","url":"git+https://github.com/org/repo.git"}}}}"#
            ),
        )
        .unwrap();
    }

    #[test]
    fn help_displays() {
        dist()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Platform-aware installer and launcher for prebuilt git-ct binaries",
            ));
    }

    #[test]
    fn version_displays() {
        dist()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("git-ct-dist"));
    }

    #[test]
    fn platforms_lists_table() {
        dist()
            .arg("platforms")
            .assert()
            .success()
            .stdout(predicate::str::contains("RUST_TARGET"))
            .stdout(predicate::str::contains("x86_64-pc-windows-msvc"))
            .stdout(predicate::str::contains("x86_64-unknown-linux-musl"))
            .stdout(predicate::str::contains("x86_64-apple-darwin"));
    }

    #[test]
    fn unsupported_platform_exits_one_with_table() {
        let temp = TempDir::new().unwrap();
        isolated(&temp, "Plan9", "x64")
            .arg("install")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Platform with type \"Plan9\" and architecture \"x64\" is not supported by git-ct",
            ))
            .stderr(predicate::str::contains("Windows_NT  x64"))
            .stderr(predicate::str::contains("Linux       x64"))
            .stderr(predicate::str::contains("Darwin      x64"));
    }

    #[test]
    fn unsupported_platform_fails_run_and_uninstall() {
        let temp = TempDir::new().unwrap();
        for command in ["run", "uninstall"] {
            isolated(&temp, "Linux", "arm64")
                .arg(command)
                .assert()
                .code(1)
                .stderr(predicate::str::contains("not supported"));
        }
    }

    #[test]
    fn uninstall_twice_succeeds() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache").join("git-ct");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("git-ct"), b"binary").unwrap();

        for _ in 0..2 {
            isolated(&temp, "Linux", "x64")
                .args(["--quiet", "uninstall"])
                .assert()
                .success();
        }
        assert!(!dir.exists());
    }

    #[test]
    fn uninstall_rejects_names_outside_the_cache() {
        for name in ["", ".", ".."] {
            let temp = TempDir::new().unwrap();
            let precious = temp.path().join("cache").join("precious");
            std::fs::create_dir_all(&precious).unwrap();
            std::fs::write(precious.join("data"), b"keep").unwrap();
            write_package_named(temp.path(), name);

            isolated(&temp, "Linux", "x64")
                .arg("uninstall")
                .assert()
                .code(1)
                .stderr(predicate::str::contains("Invalid package manifest"));

            assert!(precious.join("data").is_file(), "{name:?} removed data");
        }
    }

    #[test]
    fn run_without_install_fails() {
        let temp = TempDir::new().unwrap();
        isolated(&temp, "Linux", "x64")
            .arg("run")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Executable not found"))
            .stderr(predicate::str::contains("git-ct-dist install"));
    }

    #[cfg(unix)]
    #[test]
    fn run_passes_through_exit_code_and_args() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache").join("git-ct");
        std::fs::create_dir_all(&dir).unwrap();
        let exe = dir.join("git-ct");
        std::fs::write(
            &exe,
            "#!/bin/sh\n[ \"$1\" = \"-v\" ] && [ \"$2\" = \"a=b\" ] && exit 3\n[ \"$1\" = \"--\" ] && printf '[%s]' \"$@\" && exit 0\necho from-child\nexit 42\n",
        )
        .unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        isolated(&temp, "Linux", "x64")
            .arg("run")
            .assert()
            .code(42)
            .stdout("from-child\n");

        isolated(&temp, "Linux", "x64")
            .args(["run", "-v", "a=b"])
            .assert()
            .code(3);

        isolated(&temp, "Linux", "x64")
            .args(["run", "--", "--help"])
            .assert()
            .success()
            .stdout("[--][--help]");
    }

    #[test]
    fn info_uses_artifact_version_not_package_version() {
        let temp = TempDir::new().unwrap();
        write_package_json(temp.path(), "9.9.9");

        isolated(&temp, "Linux", "x64")
            .arg("info")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "https://github.com/org/repo/releases/download/v0.0.4/git-ct_v0.0.4_x86_64-unknown-linux-musl.tar.gz",
            ))
            .stdout(predicate::str::contains("9.9.9/").not());
    }

    #[test]
    fn quiet_info_still_prints_details() {
        let temp = TempDir::new().unwrap();
        write_package_json(temp.path(), "1.0.0");

        isolated(&temp, "Linux", "x64")
            .args(["--quiet", "info"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Download URL"))
            .stdout(predicate::str::contains("git-ct 1.0.0").not());
    }

    #[test]
    fn info_honours_configured_artifact_version() {
        let temp = TempDir::new().unwrap();
        write_package_json(temp.path(), "1.0.0");
        std::fs::write(
            temp.path().join("config.toml"),
            "[release]\nartifact_version = \"0.1.0\"\n",
        )
        .unwrap();

        isolated(&temp, "Darwin", "x64")
            .arg("info")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "/v0.1.0/git-ct_v0.1.0_x86_64-apple-darwin.tar.gz",
            ));
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[release]\nartifact_version = \"latest\"\n",
        )
        .unwrap();

        isolated(&temp, "Linux", "x64")
            .arg("info")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}
