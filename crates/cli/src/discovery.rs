// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project root discovery.
//!
//! The project root anchors `testplan.toml` and the `exclude` globs in it.
//! It is the nearest ancestor holding testplan.toml, else the git root, else
//! the directory the search started from.

use std::path::{Path, PathBuf};

/// Name of the config file.
pub const CONFIG_FILE: &str = "testplan.toml";

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    /// Directory exclude globs are relative to.
    pub root: PathBuf,
    /// Config file at the root, if there is one.
    pub config: Option<PathBuf>,
}

impl ProjectRoot {
    /// Root anchored at an explicitly given config file.
    pub fn for_config(config: &Path, cwd: &Path) -> Self {
        let config = cwd.join(config);
        let root = config
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        Self {
            root,
            config: Some(config),
        }
    }

    /// `path` relative to the root, resolving relative paths against `cwd`.
    ///
    /// Paths outside the root are returned absolute.
    pub fn relative(&self, path: &Path, cwd: &Path) -> PathBuf {
        let absolute = cwd.join(path);
        match absolute.strip_prefix(&self.root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => absolute,
        }
    }
}

/// Search from `start_dir` upward. A config file wins over a `.git` marker
/// in the same directory; the search never crosses a git root.
pub fn locate(start_dir: &Path) -> ProjectRoot {
    for dir in start_dir.ancestors() {
        let config = dir.join(CONFIG_FILE);
        if config.is_file() {
            return ProjectRoot {
                root: dir.to_path_buf(),
                config: Some(config),
            };
        }
        if dir.join(".git").exists() {
            return ProjectRoot {
                root: dir.to_path_buf(),
                config: None,
            };
        }
    }
    ProjectRoot {
        root: start_dir.to_path_buf(),
        config: None,
    }
}
