// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test plan model.
//!
//! A test plan is a JSON document listing the targets whose tests run, with
//! per-target selection rules, plus plan-wide configurations and default
//! options. Parsing is tolerant of missing keys (they stay unset) and keeps
//! unrecognized keys so a plan can be written back without loss. Only
//! content that is not a plan-shaped JSON object is rejected.

mod options;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PlanError;
use crate::inclusion::SelectionPolicy;

pub use options::{
    AddressSanitizer, CodeCoverage, CommandLineArgumentEntry, CoverageTargets,
    EnvironmentVariableEntry, ExecutionOptions, RepetitionMode, Sanitizer,
};

/// File suffix of test plan documents.
pub const PLAN_EXTENSION: &str = ".xctestplan";

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// A buildable unit that owns tests.
///
/// Only a lookup key: resolving it against real build targets is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReference {
    pub container_path: String,
    pub identifier: String,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-target test selection and execution flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTargetConfig {
    pub target: TargetReference,

    /// Tests to run exclusively. Takes precedence over `skipped_tests`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tests: Option<Vec<String>>,

    /// Tests to leave out when nothing is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_tests: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallelizable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_execution_ordering: Option<bool>,

    /// Per-target toggle; absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestTargetConfig {
    /// Name of the referenced build target.
    pub fn name(&self) -> &str {
        &self.target.name
    }

    /// Effective selection mode for this target.
    pub fn policy(&self) -> SelectionPolicy<'_> {
        SelectionPolicy::of(self)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// A named bundle of execution options applied plan-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub options: ExecutionOptions,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlanConfiguration {
    /// Sanitizers enabled by this configuration alone.
    pub fn sanitizers(&self) -> Vec<Sanitizer> {
        self.options.sanitizers()
    }
}

/// Root of a parsed test plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlanDocument {
    #[serde(default)]
    pub configurations: Vec<PlanConfiguration>,

    #[serde(default)]
    pub default_options: ExecutionOptions,

    #[serde(default)]
    pub test_targets: Vec<TestTargetConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestPlanDocument {
    /// Parse plan bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, PlanError> {
        serde_json::to_string_pretty(self).map_err(PlanError::Serialize)
    }

    /// Target names in document order. Duplicates are kept.
    pub fn target_names(&self) -> Vec<&str> {
        self.test_targets.iter().map(TestTargetConfig::name).collect()
    }

    /// First target whose name equals `name` exactly.
    pub fn find_target(&self, name: &str) -> Option<&TestTargetConfig> {
        self.test_targets.iter().find(|t| t.name() == name)
    }

    /// First configuration named `name`.
    pub fn find_configuration(&self, name: &str) -> Option<&PlanConfiguration> {
        self.configurations.iter().find(|c| c.name == name)
    }

    /// Default options with the named configuration layered on top.
    ///
    /// Returns `None` if there is no such configuration.
    pub fn effective_options(&self, configuration: &str) -> Option<ExecutionOptions> {
        let config = self.find_configuration(configuration)?;
        Some(self.default_options.overlay(&config.options))
    }
}

/// A plan document tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlan {
    /// Display name derived from the file name. Not unique.
    pub name: String,
    pub path: PathBuf,
    pub plan: TestPlanDocument,
}

impl ParsedPlan {
    /// Read and parse the plan at `path`.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let bytes = std::fs::read(path).map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(path, &bytes)
    }

    /// Parse bytes already read from `path`.
    pub fn from_slice(path: &Path, bytes: &[u8]) -> Result<Self, PlanError> {
        let plan = TestPlanDocument::from_slice(bytes).map_err(|source| PlanError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: display_name(path),
            path: path.to_path_buf(),
            plan,
        })
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.plan.target_names()
    }

    pub fn find_target(&self, name: &str) -> Option<&TestTargetConfig> {
        self.plan.find_target(name)
    }
}

/// Display name for a plan stored at `path`: the file name without `.xctestplan`.
///
/// Cosmetic only; two plans in different directories can share a name.
pub fn display_name(path: &Path) -> String {
    let Some(file_name) = path.file_name() else {
        return String::new();
    };
    let file_name = file_name.to_string_lossy();
    file_name
        .strip_suffix(PLAN_EXTENSION)
        .unwrap_or(&file_name)
        .to_string()
}
