//! Integration tests for kioskctl
//!
//! Nothing here touches a real Pi; commands that would ssh are only
//! exercised through --help and argument validation.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::tempdir;

    fn kioskctl() -> Command {
        cargo_bin_cmd!("kioskctl")
    }

    #[test]
    fn help_displays() {
        kioskctl()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("kiosk provisioner"));
    }

    #[test]
    fn version_displays() {
        kioskctl()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("kioskctl"));
    }

    #[test]
    fn config_path() {
        kioskctl()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let dir = tempdir().unwrap();
        kioskctl()
            .env("KIOSKCTL_CONFIG", dir.path().join("none.toml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[remote]"))
            .stdout(predicate::str::contains("user = \"pi\""));
    }

    #[test]
    fn config_show_reads_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[remote]\nhost = \"pi4.local\"\n").unwrap();

        kioskctl()
            .env("KIOSKCTL_CONFIG", &path)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pi4.local"));
    }

    #[test]
    fn invalid_config_fails_with_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "remote = not toml").unwrap();

        kioskctl()
            .env("KIOSKCTL_CONFIG", &path)
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn empty_host_is_rejected_before_ssh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[remote]\nhost = \"\"\n").unwrap();

        kioskctl()
            .env("KIOSKCTL_CONFIG", &path)
            .arg("status")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No remote host configured"))
            .stderr(predicate::str::contains("remote.host"));
    }

    #[test]
    fn firewall_rejects_non_numeric_port() {
        kioskctl()
            .args(["firewall", "twenty-two"])
            .assert()
            .failure();
    }

    #[test]
    fn deploy_help() {
        kioskctl()
            .args(["deploy", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("full provisioning sequence"));
    }

    #[test]
    fn unknown_subcommand_fails() {
        kioskctl().arg("frobnicate").assert().failure();
    }
}
