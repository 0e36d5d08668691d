//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the testplan crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::plan::{TargetReference, TestTargetConfig};

/// Creates a temp directory with a minimal testplan.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("testplan.toml"), "version = 1\n").unwrap();
    dir
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("testplan.toml"), config).unwrap();
    dir
}

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let full_path = root.join(rel);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full_path, content).unwrap();
    full_path
}

/// Minimal plan JSON with one target per name, no selection rules.
pub fn plan_json(targets: &[&str]) -> String {
    let targets: Vec<_> = targets
        .iter()
        .map(|name| {
            serde_json::json!({
                "target": {
                    "containerPath": "container:App.xcodeproj",
                    "identifier": format!("ID-{name}"),
                    "name": name,
                }
            })
        })
        .collect();
    serde_json::json!({
        "configurations": [],
        "defaultOptions": {},
        "testTargets": targets,
        "version": 1,
    })
    .to_string()
}

/// Target config with the given selection lists.
pub fn target(name: &str, selected: Option<&[&str]>, skipped: Option<&[&str]>) -> TestTargetConfig {
    TestTargetConfig {
        target: TargetReference {
            container_path: "container:App.xcodeproj".to_string(),
            identifier: format!("ID-{name}"),
            name: name.to_string(),
            extra: Default::default(),
        },
        selected_tests: selected.map(strings),
        skipped_tests: skipped.map(strings),
        parallelizable: None,
        random_execution_ordering: None,
        enabled: None,
        extra: Default::default(),
    }
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
