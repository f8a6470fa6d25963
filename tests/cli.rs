use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn focuskit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focuskit").unwrap();
    cmd.env("FOCUSKIT_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn use_json_backend(home: &TempDir, sessions: &str) {
    std::fs::write(
        home.path().join("config.yaml"),
        "storage:\n  backend: json\n",
    )
    .unwrap();
    std::fs::write(home.path().join("sessions.json"), sessions).unwrap();
}

#[test]
fn test_history_empty() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet"));
}

#[test]
fn test_fresh_home_runs_quietly() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .arg("history")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(home.path().join("logs").is_dir());
}

#[test]
fn test_history_reads_json_ledger_newest_first() {
    let home = TempDir::new().unwrap();
    use_json_backend(
        &home,
        r#"[
            {"id": 1, "date": "2024-03-08", "duration": 25, "type": "pomodoro", "completed": true},
            {"id": 2, "date": "2024-03-08", "duration": 5, "type": "break", "completed": true},
            {"id": 3, "date": "2024-03-09", "duration": 25, "type": "pomodoro", "completed": false}
        ]"#,
    );

    let output = focuskit(&home)
        .args(["history", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["count"], 2);
    assert_eq!(value["items"][0]["id"], 3);
    assert_eq!(value["items"][1]["id"], 1);
}

#[test]
fn test_history_all_includes_breaks() {
    let home = TempDir::new().unwrap();
    use_json_backend(
        &home,
        r#"[{"id": 7, "date": "2024-03-08", "duration": 5, "type": "break", "completed": true}]"#,
    );

    focuskit(&home)
        .args(["history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5min Break Session (Completed)"));
}

#[test]
fn test_stats_json_on_empty_ledger() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .args(["stats", "--period", "day", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"today_minutes\": 0"))
        .stdout(predicate::str::contains(
            "You're 50 minutes away from your daily goal!",
        ));
}

#[test]
fn test_stats_rejects_unknown_period() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .args(["stats", "--period", "year"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown period"));
}

#[test]
fn test_config_path_uses_home() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            home.path().join("config.yaml").display().to_string(),
        ));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    focuskit(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join("config.yaml").exists());

    focuskit(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    focuskit(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_reflects_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "timer:\n  focus_minutes: 50\n",
    )
    .unwrap();

    focuskit(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focus_minutes: 50"))
        .stdout(predicate::str::contains("break_minutes: 5"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "timer:\n  focus_minutes: 0\n",
    )
    .unwrap();

    focuskit(&home)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}

#[test]
fn test_overlong_interval_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "timer:\n  focus_minutes: 80000000\n",
    )
    .unwrap();

    focuskit(&home)
        .args(["run", "--no-progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 1440"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focuskit"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    focuskit(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("focuskit"));
}
