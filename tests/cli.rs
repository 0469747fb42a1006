use assert_cmd::Command;
use tempfile::TempDir;

fn esg(db: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("esg-terminal").unwrap();
    cmd.current_dir(db.parent().unwrap()).arg("--database").arg(db);
    cmd
}

#[test]
fn test_sample_load_then_stats_json() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("esg.db");

    esg(&db).arg("load-sample").assert().success();

    let output = esg(&db)
        .args(["stats", "--scope", "Scope 2", "--limit", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["top_emitters"].as_array().unwrap().len(), 2);
    assert_eq!(json["scopes"].as_array().unwrap().len(), 3);
    assert_eq!(json["scopes"][0]["value"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_unknown_facility_fails() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("esg.db");

    esg(&db).arg("load-sample").assert().success();
    esg(&db).args(["facility", "F099"]).assert().failure();
}

#[test]
fn test_facility_detail_json() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("esg.db");

    esg(&db).arg("load-sample").assert().success();
    let output = esg(&db)
        .args(["facility", "F001", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["facility"]["id"], "F001");
    assert_eq!(json["facility"]["record_count"], 10);
    assert_eq!(json["gases"].as_array().unwrap().len(), 3);
}
