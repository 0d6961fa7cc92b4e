mod common;

use common::{json_stdout, TestProject};
use predicates::prelude::*;

#[test]
fn config_in_working_directory_is_used() {
    let project = TestProject::with_catalog();
    project.write_file(
        "educonnect.toml",
        r#"
[search]
result_limit = 1

[search.keywords]
astronomy = ["القانون"]
"#,
    );

    let output = project
        .command()
        .args(["--json", "search", "astronomy"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = json_stdout(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["results"][0]["program"]["id"], 5);

    let output = project
        .command()
        .args(["--json", "list"])
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(json_stdout(&output)["count"], 1);
}

#[test]
fn explicit_config_path_sets_catalog() {
    let project = TestProject::new();
    project.write_file("catalogs/main.json", common::SAMPLE_CATALOG);
    project.write_file(
        "conf/custom.toml",
        r#"
[catalog]
path = "catalogs/main.json"
"#,
    );

    let output = project
        .command()
        .args(["--config", "conf/custom.toml", "--json", "list"])
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(json_stdout(&output)["count"], 5);
}

#[test]
fn catalog_env_var_overrides_config() {
    let project = TestProject::new();
    project.write_file("other.json", common::SAMPLE_CATALOG);

    project
        .command()
        .env("EDUCONNECT_CATALOG", "other.json")
        .args(["list", "-t", "nanodegree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 nano-degree programs."));
}

#[test]
fn missing_explicit_config_fails() {
    let project = TestProject::with_catalog();

    project
        .command()
        .args(["--config", "nope.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn malformed_config_fails() {
    let project = TestProject::with_catalog();
    project.write_file("educonnect.toml", "[search\nresult_limit = ");

    project
        .command()
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn duplicate_ids_rejected() {
    let project = TestProject::new();
    project.write_file(
        "data/programs.json",
        r#"[
  {"id": 1, "type": "nanodegree", "title": "a", "summary": "", "price": "1",
   "additional_price": "0", "organization": {"id": "o", "name": "n", "logo": ""}},
  {"id": 1, "type": "nanodegree", "title": "b", "summary": "", "price": "1",
   "additional_price": "0", "organization": {"id": "o", "name": "n", "logo": ""}}
]"#,
    );

    project
        .command()
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate program id 1"));
}

#[test]
fn completions_generate_for_bash() {
    let project = TestProject::new();

    project
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("educonnect"));
}
