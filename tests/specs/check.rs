//! Behavioral specs for `testplan check`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn skip_mode_excludes_skipped_class_and_method() {
    testplan_cmd()
        .args(["check", "--target", "AppTests"])
        .args(["--test", "NetworkTests/testFetch"])
        .args(["--test", "ParserTests.testHugeInput"])
        .args(["--test", "ParserTests/testSmallInput"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "excluded: NetworkTests/testFetch (skipped by NetworkTests)",
        ))
        .stdout(predicates::str::contains(
            "excluded: ParserTests.testHugeInput (skipped by ParserTests/testHugeInput)",
        ))
        .stdout(predicates::str::contains(
            "included: ParserTests/testSmallInput (not skipped)",
        ));
}

#[test]
fn selection_wins_over_skipped_tests() {
    testplan_cmd()
        .args(["check", "--target", "AppUITests"])
        .args(["--test", "LoginUITests/testLogout"])
        .args(["--test", "SettingsUITests/testReset"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "included: LoginUITests/testLogout (selected by LoginUITests)",
        ))
        .stdout(predicates::str::contains(
            "excluded: SettingsUITests/testReset (not selected)",
        ));
}

#[test]
fn target_without_rules_includes_everything() {
    testplan_cmd()
        .args(["check", "--target", "AppSnapshotTests", "--test", "AnyTests/testAnything"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .success()
        .stdout(predicates::str::contains("included: AnyTests/testAnything (all tests run)"));
}

#[test]
fn json_output() {
    let output = testplan_cmd()
        .args(["check", "-o", "json", "--target", "AppTests", "--test", "NetworkTests"])
        .arg(plan_fixture("App.xctestplan"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plan"], "App");
    assert_eq!(value["target"], "AppTests");
    assert_eq!(value["mode"], "skip");
    assert_eq!(value["tests"][0]["included"], false);
}

#[test]
fn target_name_is_case_sensitive() {
    testplan_cmd()
        .args(["check", "--target", "apptests", "--test", "A"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("no target named `apptests`"));
}

#[test]
fn missing_target_fails() {
    testplan_cmd()
        .args(["check", "--test", "A"])
        .arg(plan_fixture("App.xctestplan"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("no target selected"));
}
