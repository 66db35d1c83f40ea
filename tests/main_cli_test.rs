use std::process::Command;

use tempfile::TempDir;

fn humanage() -> Command {
    Command::new(env!("CARGO_BIN_EXE_humanage"))
}

#[test]
fn test_invalid_format_is_rejected() {
    let output = humanage()
        .args(["Ava Martinez", "--format", "jsn"])
        .output()
        .expect("binary should run");

    assert!(
        !output.status.success(),
        "Invalid --format values should cause a non-zero exit"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "stderr should explain invalid format value. stderr: {stderr}"
    );
}

#[test]
fn test_intensity_out_of_range_is_rejected() {
    let output = humanage()
        .args(["Ava Martinez", "--intensity", "101"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
}

#[test]
fn test_unknown_patient_exits_with_not_found() {
    let output = humanage()
        .args(["Nobody Here"])
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Patient not found: Nobody Here"));
}

#[test]
fn test_json_report() {
    let output = humanage()
        .args(["Marcus Lee", "--format", "json", "--intensity", "100"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["patient"]["name"], "Marcus Lee");
    assert_eq!(json["improvement"][4]["value"].as_u64().unwrap(), 100);
    assert_eq!(json["improvement"][4]["delta_text"], "+15");
}

#[test]
fn test_search() {
    let output = humanage()
        .args(["--search", "pat"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Jordan Patel"));
    assert!(!stdout.contains("Marcus Lee"));
}

#[test]
fn test_dataset_from_config_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("people.json"),
        r#"[{"name": "Lena Vogt", "image": "", "biological_age": 44,
            "chronological_age": 48, "bmi": 23.3, "gender": "female"}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("humanage.toml"), "data = \"people.json\"\n").unwrap();

    let output = humanage()
        .args(["Lena Vogt", "--format", "svg", "--config-dir"])
        .arg(dir.path())
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<svg"));
    assert!(stdout.contains("Lena Vogt"));
}

#[test]
fn test_missing_dataset_is_an_error() {
    let output = humanage()
        .args(["Ava Martinez", "--data", "/definitely/not/here.json"])
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_all_honours_intensity_and_habits() {
    let output = humanage()
        .args(["--all", "--format", "json", "--intensity", "80", "--habit", "3"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let patients = json["patients"].as_array().unwrap();
    assert_eq!(patients.len(), 3);
    for patient in patients {
        assert_eq!(patient["intensity"].as_u64().unwrap(), 80);
        assert_eq!(patient["habits"]["selected"], serde_json::json!([3]));
    }
}

#[test]
fn test_all_with_invalid_habit_fails() {
    let output = humanage()
        .args(["--all", "--habit", "18"])
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Habit slot 18 does not exist"));
}
