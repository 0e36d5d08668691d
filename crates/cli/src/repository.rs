// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory collection of the test plans of one workspace.
//!
//! Candidates are read and parsed in parallel using rayon. A candidate that
//! fails is logged and skipped; it never aborts the batch. Results keep the
//! order of the candidate list. Every load is a full rebuild.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::PlanError;
use crate::plan::{ParsedPlan, TestTargetConfig};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// A candidate that could not be loaded.
#[derive(Debug)]
pub struct DiscoveryFailure {
    pub path: PathBuf,
    pub error: PlanError,
}

/// Parsed plans for one workspace, plus the candidates that were skipped.
#[derive(Debug, Default)]
pub struct PlanRepository {
    plans: Vec<ParsedPlan>,
    failures: Vec<DiscoveryFailure>,
}

impl PlanRepository {
    /// Parse every candidate path.
    pub fn load<P: AsRef<Path> + Sync>(candidates: &[P]) -> Self {
        let results: Vec<Result<ParsedPlan, DiscoveryFailure>> = candidates
            .par_iter()
            .map(|candidate| {
                let path: &Path = candidate.as_ref();
                ParsedPlan::load(path).map_err(|error| DiscoveryFailure {
                    path: path.to_path_buf(),
                    error,
                })
            })
            .collect();

        let mut repo = Self::default();
        for result in results {
            match result {
                Ok(plan) => {
                    tracing::debug!(
                        "loaded test plan {} ({} targets)",
                        plan.path.display(),
                        plan.plan.test_targets.len()
                    );
                    repo.plans.push(plan);
                }
                Err(failure) => {
                    tracing::warn!("skipping test plan: {}", failure.error);
                    repo.failures.push(failure);
                }
            }
        }
        repo
    }

    /// Discard everything held and load `candidates` from scratch.
    pub fn reload<P: AsRef<Path> + Sync>(&mut self, candidates: &[P]) {
        *self = Self::load(candidates);
    }

    pub fn plans(&self) -> &[ParsedPlan] {
        &self.plans
    }

    pub fn failures(&self) -> &[DiscoveryFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn into_plans(self) -> Vec<ParsedPlan> {
        self.plans
    }

    /// First plan with the given display name.
    pub fn find_plan(&self, name: &str) -> Option<&ParsedPlan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// Plan loaded from exactly `path`.
    pub fn plan_at(&self, path: &Path) -> Option<&ParsedPlan> {
        self.plans.iter().find(|p| p.path == path)
    }

    /// First target named `name` across all plans, with its plan.
    pub fn find_target(&self, name: &str) -> Option<(&ParsedPlan, &TestTargetConfig)> {
        self.plans
            .iter()
            .find_map(|plan| plan.find_target(name).map(|target| (plan, target)))
    }

    /// Target names of every plan, in plan order then document order.
    pub fn target_names(&self) -> Vec<&str> {
        self.plans.iter().flat_map(|p| p.target_names()).collect()
    }
}

/// Parse every candidate, returning the plans that loaded in candidate order.
pub fn load_all<P: AsRef<Path> + Sync>(candidates: &[P]) -> Vec<ParsedPlan> {
    PlanRepository::load(candidates).into_plans()
}
