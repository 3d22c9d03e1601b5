//! Integration tests for Till

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn till() -> Command {
        cargo_bin_cmd!("till")
    }

    /// Isolated config and data paths for one test
    fn paths(dir: &TempDir) -> (String, String) {
        (
            dir.path().join("config.toml").display().to_string(),
            dir.path().join("catalog.json").display().to_string(),
        )
    }

    #[test]
    fn help_displays() {
        till()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("point-of-sale"));
    }

    #[test]
    fn version_displays() {
        till()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("till"));
    }

    #[test]
    fn status_runs() {
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "--data", data.as_str(), "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Till Status"));
    }

    #[test]
    fn status_reports_missing_data_file() {
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "--data", data.as_str(), "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Not created yet"));
    }

    #[test]
    fn status_reports_corrupt_data_file() {
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        fs::write(data.as_str(), "definitely not json").unwrap();
        till()
            .args(["--config", config.as_str(), "--data", data.as_str(), "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("empty catalog"));
    }

    #[test]
    fn config_path_displays() {
        let dir = TempDir::new().unwrap();
        let (config, _) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_displays() {
        let dir = TempDir::new().unwrap();
        let (config, _) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[currency]"));
    }

    #[test]
    fn config_set_round_trips() {
        let dir = TempDir::new().unwrap();
        let (config, _) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "config", "set", "currency.prefix", "IDR"])
            .assert()
            .success();
        till()
            .args(["--config", config.as_str(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("IDR"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let (config, _) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "config", "set", "general.nope", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown configuration key"));
    }

    #[test]
    fn corrupt_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let (config, _) = paths(&dir);
        fs::write(config.as_str(), "this is [not toml").unwrap();
        till()
            .args(["--config", config.as_str(), "config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn init_writes_config() {
        let dir = TempDir::new().unwrap();
        let (config, _) = paths(&dir);

        till()
            .args(["--config", config.as_str(), "init"])
            .assert()
            .success();
        let written = fs::read_to_string(&config).unwrap();
        assert!(written.contains("[storage]"));

        // A second run refuses without --force
        till()
            .args(["--config", config.as_str(), "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));

        till()
            .args(["--config", config.as_str(), "init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn catalog_list_denied_without_login() {
        // The test harness has no TTY, so the session stays public
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "--data", data.as_str(), "catalog", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Admin access required"));
    }

    #[test]
    fn catalog_add_denied_without_login() {
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        till()
            .args([
                "--config", config.as_str(), "--data", data.as_str(), "catalog", "add", "Kopi", "15000",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Admin access required"));

        // The denied mutation never reached the data file
        assert_eq!(fs::read_to_string(&data).unwrap(), "{}");
    }

    #[test]
    fn open_requires_terminal() {
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        till()
            .args(["--config", config.as_str(), "--data", data.as_str(), "open"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("terminal"));
    }

    #[test]
    fn data_env_var_is_honored() {
        let dir = TempDir::new().unwrap();
        let (config, data) = paths(&dir);
        fs::write(data.as_str(), "{\n  \"Kopi\": 15000\n}").unwrap();
        till()
            .env("TILL_DATA", &data)
            .args(["--config", config.as_str(), "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 item(s)"));
    }
}
