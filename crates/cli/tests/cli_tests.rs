use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("learning-tracker").unwrap();
    cmd.env("LEARNING_TRACKER_DATA_DIR", data_dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("learning-tracker").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Track skills, products, weekly plans"));
}

#[test]
fn test_cli_ship_add_help() {
    let mut cmd = Command::cargo_bin("learning-tracker").unwrap();
    cmd.args(["ship", "add", "--help"]).assert().success().stdout(predicate::str::contains("--link"));
}

#[test]
fn test_empty_dashboard() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lastShipDate\": \"N/A\""));
}

#[test]
fn test_seed_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir).arg("seed").assert().success().stdout(predicate::str::contains("29 skills"));
    tracker_cmd(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"productCount\": 4"))
        .stdout(predicate::str::contains("\"streak\": 1"));
}

#[test]
fn test_ship_without_link_is_rejected() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["ship", "add", "--summary", "No evidence"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one link is required"));
    tracker_cmd(&dir).args(["ship", "list"]).assert().success().stdout(predicate::str::contains("[]"));
}

#[test]
fn test_ship_add_then_list() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["ship", "add", "-s", "Basic map view", "-l", "https://demo.example.com/map/v1", "--date", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ship-"));
    tracker_cmd(&dir)
        .args(["ship", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic map view"));
}

#[test]
fn test_media_needs_three_takeaways() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["media", "add", "--title", "DDIA", "--progress", "pp 1-20", "--takeaway", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly three takeaways"));
}

#[test]
fn test_export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.json");
    tracker_cmd(&dir).arg("seed").assert().success();
    tracker_cmd(&dir).arg("export").arg("--out").arg(&backup).assert().success();
    tracker_cmd(&dir).arg("reset").assert().success();
    tracker_cmd(&dir)
        .arg("import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported successfully"));
    tracker_cmd(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod-map"));
}

#[test]
fn test_import_rejects_wrong_version() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("old.json");
    std::fs::write(
        &backup,
        r#"{"version":"0.1.0","products":[],"skills":[],"media":[],"weeks":[],"shipLog":[],"streak":0}"#,
    )
    .unwrap();
    tracker_cmd(&dir)
        .arg("import")
        .arg(&backup)
        .assert()
        .failure()
        .stderr(predicate::str::contains("version mismatch"));
}

#[test]
fn test_settings_reports_base_path() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .env("LEARNING_TRACKER_BASE", "/tracker/")
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basePath\": \"/tracker/\""));
}

#[test]
fn test_skill_toggle_reports_streak() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir).arg("seed").assert().success();
    tracker_cmd(&dir)
        .args(["skill", "toggle", "s-sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("streak: 1"));
    tracker_cmd(&dir)
        .args(["skill", "list", "--search", "sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"done\": true"));
}

#[test]
fn test_skill_notes_are_saved() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir).arg("seed").assert().success();
    tracker_cmd(&dir).args(["skill", "notes", "s-sql", "window functions next"]).assert().success();
    tracker_cmd(&dir)
        .args(["skill", "list", "--search", "sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("window functions next"))
        .stdout(predicate::str::contains("\"done\": false"));
    tracker_cmd(&dir)
        .args(["skill", "notes", "s-missing", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no skill with id s-missing"));
}

#[test]
fn test_media_add_then_list() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args([
            "media", "add", "--title", "DDIA", "--progress", "pp 1-20", "--date", "2024-01-02",
            "--takeaway", "logs", "--takeaway", "replication", "--takeaway", "partitioning",
            "--tags", "databases, ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("media-"));
    tracker_cmd(&dir)
        .args(["media", "list", "--type", "book", "--tag", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DDIA"))
        .stdout(predicate::str::contains("\"timeSpentMinutes\": 30"));
}

#[test]
fn test_week_add_then_update_keeps_streak() {
    let dir = TempDir::new().unwrap();
    let output = tracker_cmd(&dir)
        .args(["week", "add", "--ship-goal", "Ship MVP"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(output).unwrap().trim().to_owned();
    assert!(id.starts_with("week-"));

    tracker_cmd(&dir)
        .args(["week", "update", &id, "--goal", "ship", "--goal-done", "true", "--review-template"])
        .args(["--metric", "p95 ms:900->780 (after caching)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("streak: 1"));
    tracker_cmd(&dir)
        .args(["week", "metrics", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("p95 ms:900->780 (after caching)"));
    tracker_cmd(&dir)
        .args(["week", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What shipped?"))
        .stdout(predicate::str::contains("\"done\": true"));
}

#[test]
fn test_product_update_replaces_kpis() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir).arg("seed").assert().success();
    tracker_cmd(&dir)
        .args(["product", "kpis", "prod-map"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Site coverage %:Initial 10 cities"));
    tracker_cmd(&dir)
        .args(["product", "update", "prod-map", "--status", "background", "--kpi", "weekly users:50"])
        .assert()
        .success();
    tracker_cmd(&dir)
        .args(["product", "kpis", "prod-map"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly users:50"))
        .stdout(predicate::str::contains("Site coverage").not());
    tracker_cmd(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"background\""));
}

#[test]
fn test_product_update_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["product", "update", "prod-none", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no product with id prod-none"));
}
