// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test plan model and test inclusion resolution.
//!
//! Parses Xcode-style test plans, indexes their targets and decides whether
//! a test identifier runs under a target's selection rules.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod identifier;
pub mod inclusion;
pub mod plan;
pub mod report;
pub mod repository;
pub mod session;
pub mod workspace;

#[cfg(test)]
pub mod test_utils;

pub use error::PlanError;
pub use identifier::TestIdentifier;
pub use inclusion::{Decision, Reason, SelectionPolicy, decide, filter_included, is_included};
pub use plan::{ParsedPlan, TargetReference, TestPlanDocument, TestTargetConfig};
pub use repository::{DiscoveryFailure, PlanRepository, load_all};
pub use session::Session;
