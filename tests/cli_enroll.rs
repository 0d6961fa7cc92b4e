mod common;

use common::{json_stdout, TestProject};
use predicates::prelude::*;

#[test]
fn enroll_existing_program() {
    let project = TestProject::with_catalog();

    let output = project
        .command()
        .args(["--json", "enroll", "3"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = json_stdout(&output);
    assert_eq!(json["status"], "enrolled");
    assert_eq!(json["program"]["id"], 3);
    assert_eq!(json["program"]["title"], "دبلوم المحاسبة");
    assert_eq!(json["program"]["organization"]["name"], "جامعة الملك سعود");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Successfully enrolled in"));
}

#[test]
fn enroll_echoes_catalog_record_unchanged() {
    let project = TestProject::with_catalog();

    let output = project
        .command()
        .args(["--json", "enroll", "3"])
        .assert()
        .success()
        .get_output()
        .clone();

    let catalog: serde_json::Value = serde_json::from_str(common::SAMPLE_CATALOG).unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["program"], catalog["nano_degrees"][2]);
    assert!(json["program"]["rating_result"]["rating_avg"].is_u64());
    assert!(json["program"]["discount"].is_null());
}

#[test]
fn enroll_missing_program_is_not_a_failure() {
    let project = TestProject::with_catalog();

    let output = project
        .command()
        .args(["--json", "enroll", "99"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = json_stdout(&output);
    assert_eq!(json["status"], "not_found");
    assert_eq!(json["message"], "Program with ID 99 not found.");
    assert!(json.get("program").is_none());
}

#[test]
fn enroll_human_output() {
    let project = TestProject::with_catalog();

    project
        .command()
        .args(["enroll", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("الأمن السيبراني"));

    project
        .command()
        .args(["enroll", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Program with ID 7 not found."));
}

#[test]
fn enroll_rejects_non_numeric_id() {
    let project = TestProject::with_catalog();

    project
        .command()
        .args(["enroll", "abc"])
        .assert()
        .failure();
}
