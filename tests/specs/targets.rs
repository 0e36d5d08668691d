//! Behavioral specs for `testplan targets`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn prints_targets_in_document_order() {
    testplan_cmd()
        .arg("targets")
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .success()
        .stdout("AppTests\nAppUITests\nAppSnapshotTests\n");
}

#[test]
fn plan_flag_selects_by_name() {
    testplan_cmd()
        .args(["targets", "--plan", "Smoke"])
        .arg(plan_fixture("App.xctestplan"))
        .arg(plan_fixture("Smoke.xctestplan"))
        .assert()
        .success()
        .stdout("AppTests\n");
}

#[test]
fn unknown_plan_fails() {
    testplan_cmd()
        .args(["targets", "--plan", "Nightly"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("no test plan named `Nightly`"));
}

#[test]
fn no_plans_fails() {
    testplan_cmd()
        .arg("targets")
        .assert()
        .failure()
        .stderr(predicates::str::contains("no test plans loaded"));
}
