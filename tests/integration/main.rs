//! Integration tests for gomarket

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated to a scratch data dir and config path
    fn gomarket(home: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("gomarket");
        cmd.env("GOMARKET_DATA_DIR", home.path().join("data"))
            .env("GOMARKET_CONFIG", home.path().join("config.toml"))
            .env("GOMARKET_PLAIN", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn add(home: &TempDir, id: &str, title: &str) {
        gomarket(home)
            .args(["add", id, "--title", title, "--image-url", "u", "--price", "10"])
            .assert()
            .success();
    }

    fn list_json(home: &TempDir) -> serde_json::Value {
        let output = gomarket(home)
            .args(["list", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn help_displays() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("persisted shopping cart"));
    }

    #[test]
    fn list_empty() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn add_persists_across_runs() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");

        let cart = list_json(&home);
        assert_eq!(
            cart,
            serde_json::json!([
                {"id": "1", "title": "A", "image_url": "u", "price": 10.0, "quantity": 1}
            ])
        );
    }

    #[test]
    fn add_same_product_twice_appends() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");
        add(&home, "1", "A");

        let cart = list_json(&home);
        assert_eq!(cart.as_array().unwrap().len(), 2);
    }

    #[test]
    fn add_rejects_nan_price_and_keeps_cart() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");

        gomarket(&home)
            .args(["add", "2", "--title", "B", "--price", "NaN"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("finite"));

        let cart = list_json(&home);
        assert_eq!(cart.as_array().unwrap().len(), 1);
        assert_eq!(cart[0]["id"], "1");
    }

    #[test]
    fn increment_then_decrement() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");
        add(&home, "2", "B");

        gomarket(&home).args(["increment", "1"]).assert().success();
        gomarket(&home).args(["inc", "1"]).assert().success();
        gomarket(&home).args(["dec", "1"]).assert().success();

        gomarket(&home)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout("1\t2\n2\t1\n");
    }

    #[test]
    fn decrement_at_one_removes() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");

        gomarket(&home)
            .args(["decrement", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed A"));

        assert_eq!(list_json(&home), serde_json::json!([]));
    }

    #[test]
    fn unknown_id_is_not_an_error() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["increment", "nonexistent"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Not in cart: nonexistent"));
    }

    #[test]
    fn clear_requires_confirmation() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");

        gomarket(&home).arg("clear").assert().success();
        assert_eq!(list_json(&home).as_array().unwrap().len(), 1);

        gomarket(&home).args(["clear", "--yes"]).assert().success();
        assert_eq!(list_json(&home), serde_json::json!([]));
    }

    #[test]
    fn audit_journal_records_changes() {
        let home = TempDir::new().unwrap();
        add(&home, "1", "A");
        gomarket(&home).args(["inc", "1"]).assert().success();

        let journal_path = home.path().join("data").join("audit.log");
        let journal = std::fs::read_to_string(journal_path).unwrap();
        let events: Vec<serde_json::Value> = journal
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "cart.add");
        assert_eq!(events[1]["event"], "cart.increment");
        assert_eq!(events[1]["data"]["quantity"], 2);
    }

    #[test]
    fn increment_policy_from_config() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["config", "set", "cart.duplicate_policy", "increment"])
            .assert()
            .success();

        add(&home, "1", "A");
        add(&home, "1", "A");

        let cart = list_json(&home);
        assert_eq!(cart.as_array().unwrap().len(), 1);
        assert_eq!(cart[0]["quantity"], 2);
    }

    #[test]
    fn config_path() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cart]"));
    }

    #[test]
    fn config_leaves_data_dir_alone() {
        let home = TempDir::new().unwrap();
        gomarket(&home).args(["config", "show"]).assert().success();
        gomarket(&home).args(["completions", "zsh"]).assert().success();

        assert!(!home.path().join("data").exists());
    }

    #[test]
    fn config_set_invalid_log_format_fails() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["config", "set", "general.log_format", "yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid log format"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["config", "set", "cart.color", "red"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown configuration key"));
    }

    #[test]
    fn completions_generate() {
        let home = TempDir::new().unwrap();
        gomarket(&home)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gomarket"));
    }
}
