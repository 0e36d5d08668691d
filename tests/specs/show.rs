//! Behavioral specs for `testplan show`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn show_round_trips_the_plan() {
    let output = testplan_cmd()
        .arg("show")
        .arg(plan_fixture("App.xctestplan"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(plan_fixture("App.xctestplan")).unwrap())
            .unwrap();
    assert_eq!(shown, original);
}

#[test]
fn show_configuration_merges_defaults() {
    let output = testplan_cmd()
        .args(["show", "--configuration", "English"])
        .arg(plan_fixture("App.xctestplan"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let options: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(options["language"], "en");
    assert_eq!(options["region"], "US");
    assert_eq!(options["testTimeoutsEnabled"], true);
    assert_eq!(options["maximumTestRepetitions"], 3);
}

#[test]
fn show_unknown_configuration_fails() {
    testplan_cmd()
        .args(["show", "--configuration", "German"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("no configuration named `German`"));
}
