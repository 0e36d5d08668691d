// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test inclusion resolution.
//!
//! Decides whether a test runs under a target's configuration:
//! 1. Non-empty `selectedTests`: only matching tests run (`skippedTests` ignored)
//! 2. Non-empty `skippedTests`: every test runs except matching ones
//! 3. Otherwise every test of the target runs
//!
//! An entry matches a test when it equals the normalized identifier, names
//! its class as a prefix (`ClassA` for `ClassA/testX`), or equals the class
//! component.

use serde::Serialize;

use crate::identifier::TestIdentifier;
use crate::plan::TestTargetConfig;

#[cfg(test)]
#[path = "inclusion_tests.rs"]
mod tests;

/// Effective selection mode of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy<'a> {
    /// Only tests matching an entry run.
    Select(&'a [String]),
    /// Tests matching an entry are left out.
    Skip(&'a [String]),
    /// Every test runs.
    All,
}

impl<'a> SelectionPolicy<'a> {
    /// Derive the policy of `target`. Selection wins if both lists are populated.
    pub fn of(target: &'a TestTargetConfig) -> Self {
        match (non_empty(&target.selected_tests), non_empty(&target.skipped_tests)) {
            (Some(selected), _) => SelectionPolicy::Select(selected),
            (None, Some(skipped)) => SelectionPolicy::Skip(skipped),
            (None, None) => SelectionPolicy::All,
        }
    }

    /// Decide for an already-normalized identifier.
    pub fn decide(&self, id: &TestIdentifier) -> Decision {
        match self {
            SelectionPolicy::Select(entries) => match first_match(id, entries) {
                Some(entry) => Decision::include(Reason::Selected(entry.clone())),
                None => Decision::exclude(Reason::NotSelected),
            },
            SelectionPolicy::Skip(entries) => match first_match(id, entries) {
                Some(entry) => Decision::exclude(Reason::Skipped(entry.clone())),
                None => Decision::include(Reason::NotSkipped),
            },
            SelectionPolicy::All => Decision::include(Reason::AllTests),
        }
    }
}

fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|entries| !entries.is_empty())
}

fn first_match<'e>(id: &TestIdentifier, entries: &'e [String]) -> Option<&'e String> {
    entries.iter().find(|entry| id.matches(entry))
}

/// Which rule produced a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "entry", rename_all = "snake_case")]
pub enum Reason {
    /// Matched this `selectedTests` entry.
    Selected(String),
    /// Selection mode, no entry matched.
    NotSelected,
    /// Matched this `skippedTests` entry.
    Skipped(String),
    /// Exclusion mode, no entry matched.
    NotSkipped,
    /// Target has no selection rules.
    AllTests,
}

/// Outcome of resolving one test against one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub included: bool,
    pub reason: Reason,
}

impl Decision {
    fn include(reason: Reason) -> Self {
        Self {
            included: true,
            reason,
        }
    }

    fn exclude(reason: Reason) -> Self {
        Self {
            included: false,
            reason,
        }
    }
}

/// Resolve `test_id` against `target`, reporting the rule that applied.
pub fn decide(test_id: &str, target: &TestTargetConfig) -> Decision {
    target.policy().decide(&TestIdentifier::parse(test_id))
}

/// True if `test_id` runs under `target`.
pub fn is_included(test_id: &str, target: &TestTargetConfig) -> bool {
    decide(test_id, target).included
}

/// The subset of `test_ids` that runs under `target`, in input order.
pub fn filter_included<'a, I>(test_ids: I, target: &TestTargetConfig) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let policy = target.policy();
    test_ids
        .into_iter()
        .filter(|id| policy.decide(&TestIdentifier::parse(id)).included)
        .collect()
}
