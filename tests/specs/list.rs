//! Behavioral specs for `testplan list`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn lists_plans_in_argument_order() {
    let output = testplan_cmd()
        .arg("list")
        .arg(plan_fixture("Smoke.xctestplan"))
        .arg(plan_fixture("App.xctestplan"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Smoke: 1 target ("));
    assert!(lines[1].starts_with("App: 3 targets ("));
}

#[test]
fn malformed_plan_is_skipped() {
    testplan_cmd()
        .arg("list")
        .arg(plan_fixture("App.xctestplan"))
        .arg(plan_fixture("Broken.xctestplan"))
        .arg(plan_fixture("Smoke.xctestplan"))
        .assert()
        .success()
        .stdout(predicates::str::contains("App: 3 targets"))
        .stdout(predicates::str::contains("Smoke: 1 target"))
        .stdout(predicates::str::contains("1 skipped"))
        .stderr(predicates::str::contains("skipping test plan"))
        .stderr(predicates::str::contains("\u{1b}[").not());
}

#[test]
fn config_plan_that_failed_to_parse_still_lists() {
    let project = Project::empty();
    let app = project.plan("App.xctestplan");
    let broken = project.plan("Broken.xctestplan");
    project.config("version = 1\nplan = \"Broken\"\n");

    project
        .cmd()
        .arg("list")
        .arg(&app)
        .arg(&broken)
        .assert()
        .success()
        .stdout(predicates::str::contains("App: 3 targets"))
        .stdout(predicates::str::contains("1 skipped"));
}

#[test]
fn json_reports_failures() {
    let output = testplan_cmd()
        .args(["list", "-o", "json"])
        .arg(plan_fixture("Broken.xctestplan"))
        .arg(plan_fixture("Smoke.xctestplan"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plans"][0]["name"], "Smoke");
    assert_eq!(value["plans"][0]["targets"][0], "AppTests");
    assert_eq!(value["failures"].as_array().unwrap().len(), 1);
}

#[test]
fn no_plans_is_not_an_error() {
    testplan_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}
