use assert_cmd::Command;
use std::fs;

fn register_fixture() -> String {
    r#"[
        {
            "id": "r-1",
            "riskType": "asset",
            "confidentialityImpact": 4,
            "integrityImpact": 4,
            "availabilityImpact": 4,
            "impact": 4,
            "likelihood": 5,
            "riskScore": 20.0,
            "status": "identified",
            "assetCategory": "Access Control",
            "createdAt": "2024-01-10T09:00:00Z"
        },
        {
            "id": "r-2",
            "confidentialityImpact": 2,
            "integrityImpact": 2,
            "availabilityImpact": 2,
            "impact": 2,
            "likelihood": 2,
            "riskScore": 4.0,
            "status": "closed",
            "riskResponseStrategy": "Mitigate"
        }
    ]"#
    .to_string()
}

#[test]
fn test_metrics_command_emits_dashboard_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("register.json");
    fs::write(&path, register_fixture()).unwrap();

    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .args(["metrics", path.to_str().unwrap(), "--as-of", "2024-03-15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let metrics: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(metrics["active"], 1);
    assert_eq!(metrics["mitigated"], 50);
    assert_eq!(metrics["aboveTolerance"], 50);
    assert_eq!(metrics["averageRiskScoreTrend"].as_array().unwrap().len(), 12);
    assert_eq!(
        metrics["riskCategoryDistribution"][0]["category"],
        "Identity and Access"
    );
}

#[test]
fn test_metrics_command_terminal_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("register.json");
    fs::write(&path, register_fixture()).unwrap();

    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .args([
            "metrics",
            path.to_str().unwrap(),
            "--as-of",
            "2024-03-15",
            "--format",
            "terminal",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Active risks:     1"));
    assert!(stdout.contains("Severity distribution"));
}

#[test]
fn test_checklist_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checklist.json");
    fs::write(
        &path,
        r#"[
            {"id": "h-1", "standardRef": "A.5", "description": "Section", "isHeader": true},
            {"id": "c-1", "standardRef": "A.5.1", "description": "Policy", "status": "completed"},
            {"id": "c-2", "standardRef": "A.5.2", "description": "Roles", "status": "in-progress"}
        ]"#,
    )
    .unwrap();

    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .args(["checklist", path.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["completionPercentage"], 50);
    assert_eq!(stats["progressPercentage"], 100);
}

#[test]
fn test_metrics_command_rejects_missing_file() {
    Command::cargo_bin("riskmap")
        .unwrap()
        .args(["metrics", "does-not-exist.json"])
        .assert()
        .failure();
}
