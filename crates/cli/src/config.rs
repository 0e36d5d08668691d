// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing.
//!
//! `testplan.toml` supplies defaults for the CLI: which plan and target to
//! use when none is given, and glob patterns for plan paths to ignore.

use std::path::Path;

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;

use crate::discovery::ProjectRoot;

/// Only supported config version.
pub const CONFIG_VERSION: i64 = 1;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Contents of testplan.toml.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version (must be 1).
    pub version: i64,

    /// Display name of the plan to use by default.
    #[serde(default)]
    pub plan: Option<String>,

    /// Target to use by default.
    #[serde(default)]
    pub target: Option<String>,

    /// Glob patterns for plan paths to ignore.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Compiled exclude patterns. Invalid globs are logged and dropped.
    pub fn exclude_set(&self) -> GlobSet {
        build_glob_set(&self.exclude)
    }

    /// Drop candidates matching an exclude pattern, keeping order.
    ///
    /// Patterns match the candidate's path relative to the project root, so
    /// `Pods/**` means the same thing from any working directory.
    pub fn filter_candidates<P: AsRef<Path>>(
        &self,
        candidates: Vec<P>,
        project: &ProjectRoot,
        cwd: &Path,
    ) -> Vec<P> {
        if self.exclude.is_empty() {
            return candidates;
        }
        let excluded = self.exclude_set();
        candidates
            .into_iter()
            .filter(|candidate| {
                let rel = project.relative(candidate.as_ref(), cwd);
                let skip = excluded.is_match(&rel);
                if skip {
                    tracing::debug!("excluded by config: {}", rel.display());
                }
                !skip
            })
            .collect()
    }
}

/// Parse config text.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if config.version != CONFIG_VERSION {
        anyhow::bail!(
            "unsupported config version {} in {} (expected {})",
            config.version,
            path.display(),
            CONFIG_VERSION
        );
    }
    Ok(config)
}

/// Load config from file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&content, path)
}

/// Build a GlobSet from pattern strings.
fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        } else {
            tracing::warn!("invalid glob pattern: {}", pattern);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}
