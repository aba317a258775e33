#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli(plan: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shiftfill-cli").unwrap();
    cmd.arg("--plan").arg(plan);
    cmd
}

#[test]
fn import_generate_report_flow() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let staff = dir.path().join("staff.csv");
    let shifts = dir.path().join("shifts.csv");
    let avail = dir.path().join("availability.csv");
    fs::write(&staff, "id,display_name\nana,Ana\nben,Ben\n").unwrap();
    fs::write(
        &shifts,
        "date,shift_template_id,shift_name,required,duration_hours\n2025-10-06,am,Matin,3,8\n",
    )
    .unwrap();
    fs::write(
        &avail,
        "staff_id,date,shift_template_id,available\nana,2025-10-06,am,true\n",
    )
    .unwrap();

    cli(&plan).arg("import-staff").arg("--csv").arg(&staff).assert().success();
    cli(&plan).arg("import-shifts").arg("--csv").arg(&shifts).assert().success();
    cli(&plan)
        .arg("import-availability")
        .arg("--csv")
        .arg(&avail)
        .assert()
        .success();

    cli(&plan)
        .args(["generate", "--seed", "5", "--locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coverage: 33.3% (1/3)"))
        .stdout(predicate::str::contains("Monday Matin: 3 required, 1 assigned"));

    let warnings = dir.path().join("warnings.csv");
    cli(&plan)
        .arg("report")
        .arg("--warnings-csv")
        .arg(&warnings)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Ben has no shifts this week"));
    assert!(fs::read_to_string(&warnings).unwrap().contains("understaffed,critical"));

    cli(&plan)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-10-06 | am | Ana"));
}

#[test]
fn generate_without_shifts_fails() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    cli(&plan).arg("generate").assert().failure();
}

#[test]
fn expand_templates_into_plan() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let templates = dir.path().join("templates.json");
    fs::write(
        &templates,
        r#"{
  "id": "cafe",
  "name": "Café",
  "templates": [
    { "id": "am", "name": "Matin", "start_time": "07:00:00", "end_time": "15:00:00", "required": 2, "days": [1, 2, 3, 4, 5] },
    { "id": "we", "name": "Week-end", "start_time": "09:00:00", "end_time": "17:00:00", "days": [0, 6] }
  ]
}"#,
    )
    .unwrap();

    cli(&plan)
        .args(["expand", "--week-start", "2025-10-06", "--templates"])
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("7 shift(s) from template set cafe"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&plan).unwrap()).unwrap();
    assert_eq!(saved["input"]["shifts"].as_array().unwrap().len(), 7);
}
