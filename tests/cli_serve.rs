mod common;

use std::time::Duration;

use common::TestProject;
use predicates::prelude::*;

// With stdin closed the stdio session ends right after startup.

#[test]
fn serve_announces_startup_on_stderr() {
    let project = TestProject::with_catalog();

    project
        .command()
        .args(["serve", "--transport", "stdio"])
        .timeout(Duration::from_secs(10))
        .assert()
        .stdout(predicate::str::contains("Serving").not())
        .stderr(predicate::str::contains("Serving 5 programs over MCP on stdio"));
}

#[test]
fn serve_quiet_suppresses_startup_message() {
    let project = TestProject::with_catalog();

    project
        .command()
        .args(["--quiet", "serve", "--transport", "stdio"])
        .timeout(Duration::from_secs(10))
        .assert()
        .stderr(predicate::str::contains("Serving").not());
}
