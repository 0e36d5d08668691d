// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-held selection state.
//!
//! The library itself is stateless. Whoever drives it (the CLI, an editor
//! integration) keeps the currently selected plan and target here and passes
//! it along. Plans are remembered by path because display names can repeat.

use std::path::{Path, PathBuf};

use crate::inclusion::{self, Decision};
use crate::plan::{ParsedPlan, TestTargetConfig};
use crate::repository::PlanRepository;

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// The selected plan and target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    plan: Option<PathBuf>,
    target: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_plan(&mut self, plan: &ParsedPlan) {
        self.plan = Some(plan.path.clone());
    }

    pub fn select_plan_path(&mut self, path: impl Into<PathBuf>) {
        self.plan = Some(path.into());
    }

    pub fn select_target(&mut self, name: impl Into<String>) {
        self.target = Some(name.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn plan_path(&self) -> Option<&Path> {
        self.plan.as_deref()
    }

    pub fn target_name(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The selected plan, if it is still present in `repo`.
    pub fn plan<'r>(&self, repo: &'r PlanRepository) -> Option<&'r ParsedPlan> {
        repo.plan_at(self.plan.as_deref()?)
    }

    /// The selected target within the selected plan.
    pub fn target<'r>(&self, repo: &'r PlanRepository) -> Option<&'r TestTargetConfig> {
        self.plan(repo)?.find_target(self.target.as_deref()?)
    }

    /// Resolve `test_id` against the selected target.
    ///
    /// Returns `None` when no plan or target is selected or it no longer exists.
    pub fn decide(&self, repo: &PlanRepository, test_id: &str) -> Option<Decision> {
        self.target(repo)
            .map(|target| inclusion::decide(test_id, target))
    }
}
