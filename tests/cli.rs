use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn aim_prints_both_arcs_and_writes_trajectory_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("low.csv");

    Command::cargo_bin("aim")
        .expect("aim bin")
        .args([
            "--speed",
            "650",
            "--gravity",
            "400",
            "--x",
            "650",
            "--y",
            "150",
            "--samples",
            "20",
            "--trajectory",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Stationary Aim ==="))
        .stdout(predicate::str::contains("angle = 34.265 deg"))
        .stdout(predicate::str::contains("angle = 68.729 deg"));

    let mut reader = csv::Reader::from_path(&csv_path).expect("csv");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, ["time_s", "x", "y"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 21);
    let last = rows.last().unwrap();
    let x: f64 = last[1].parse().unwrap();
    let y: f64 = last[2].parse().unwrap();
    assert!((x - 650.0).abs() < 1e-3);
    assert!((y - 150.0).abs() < 1e-3);
}

#[test]
fn aim_reports_unreachable_target() {
    Command::cargo_bin("aim")
        .expect("aim bin")
        .args(["--speed", "100", "--gravity", "10", "--x", "1500", "--y", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is unreachable (flat range 1000.000)"));
}

#[test]
fn aim_rejects_non_positive_speed() {
    Command::cargo_bin("aim")
        .expect("aim bin")
        .args(["--speed", "0", "--gravity", "10", "--x", "100", "--y", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("muzzle speed"));
}

#[test]
fn intercept_solves_reference_scenario_and_writes_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("out/summary.json");

    Command::cargo_bin("intercept")
        .expect("intercept bin")
        .args([
            "--scenario",
            "configs/scenarios/01_reference_intercept.toml",
            "--json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Intercept: reference_intercept ==="))
        .stdout(predicate::str::contains("elevation = 28.22"));

    let contents = std::fs::read_to_string(&json_path).expect("summary json");
    let summary: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(summary["scenario"], "reference_intercept");
    assert_eq!(summary["hit"]["arm"], "low");
    let t = summary["hit"]["time_to_impact_s"].as_f64().unwrap();
    assert!((t - 1.05).abs() < 0.002);
}

#[test]
fn intercept_reports_out_of_range_scenario() {
    Command::cargo_bin("intercept")
        .expect("intercept bin")
        .args(["--scenario", "configs/scenarios", "--name", "out_of_range"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unreachable    : target out of range at t = 0.000 s",
        ));
}

#[test]
fn intercept_fails_on_unknown_scenario_name() {
    Command::cargo_bin("intercept")
        .expect("intercept bin")
        .args(["--scenario", "configs/scenarios", "--name", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn binaries_report_library_version() {
    Command::cargo_bin("intercept")
        .expect("intercept bin")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(ballistic_aim::version()));
}

#[test]
fn aim_uses_catalog_weapon_by_name() {
    // Railgun has no gravity: one straight line-of-sight shot, 500 units at 5000/s.
    Command::cargo_bin("aim")
        .expect("aim bin")
        .args(["--weapon", "railgun", "--x", "400", "--y", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Single   : angle = 36.870 deg, time = 0.100 s",
        ))
        .stdout(predicate::str::contains("Low arc").not());
}

#[test]
fn aim_requires_a_weapon_source() {
    Command::cargo_bin("aim")
        .expect("aim bin")
        .args(["--x", "400", "--y", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--weapon"));

    Command::cargo_bin("aim")
        .expect("aim bin")
        .args(["--weapon", "slingshot", "--x", "400", "--y", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weapon 'slingshot' not found"));
}

#[test]
fn aim_accepts_negative_horizontal_distance() {
    Command::cargo_bin("aim")
        .expect("aim bin")
        .args([
            "--speed", "650", "--gravity", "400", "--x", "-650", "--y", "150",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("angle = 34.265 deg"))
        .stdout(predicate::str::contains("angle = 68.729 deg"));
}

#[test]
fn intercept_json_on_stdout_is_parseable() {
    let output = Command::cargo_bin("intercept")
        .expect("intercept bin")
        .args([
            "--scenario",
            "configs/scenarios/01_reference_intercept.toml",
            "--json",
            "-",
        ])
        .output()
        .expect("run intercept");
    assert!(output.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a single JSON document");
    assert_eq!(summary["scenario"], "reference_intercept");
    assert_eq!(summary["policy"], "abort");
    let report = String::from_utf8(output.stderr).unwrap();
    assert!(report.contains("=== Intercept: reference_intercept ==="));
}

#[test]
fn intercept_weapon_override_changes_the_outcome() {
    // The mortar loses the climbing target before its shell can catch up.
    Command::cargo_bin("intercept")
        .expect("intercept bin")
        .args([
            "--scenario",
            "configs/scenarios/01_reference_intercept.toml",
            "--weapon",
            "Mortar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unreachable    : target out of range at t = 0.813 s",
        ));
}
