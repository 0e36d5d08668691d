//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command running the testplan binary in an empty directory.
///
/// The directory is isolated from any testplan.toml in the source tree.
pub fn testplan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("testplan"));
    cmd.env_remove("TESTPLAN_CONFIG")
        .env_remove("TESTPLAN_LOG")
        .current_dir(std::env::temp_dir());
    cmd
}

/// Path to a plan fixture.
pub fn plan_fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join("plans")
        .join(name)
}

/// Temporary project with a `.git` marker so config discovery stops here.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self, content: &str) {
        std::fs::write(self.path().join("testplan.toml"), content).unwrap();
    }

    /// Copies a plan fixture into the project, returning its path.
    pub fn plan(&self, fixture: &str) -> PathBuf {
        let dest = self.path().join(fixture);
        std::fs::copy(plan_fixture(fixture), &dest).unwrap();
        dest
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = testplan_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
