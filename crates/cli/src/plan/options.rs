// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution option bundles.
//!
//! The same shape is used for a plan's `defaultOptions` and for each
//! configuration's `options`. Common keys are typed; every other key is kept
//! in `extra` so re-serializing a plan does not drop anything.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TargetReference;

/// Execution options (locale, sanitizers, ordering, coverage, timeouts, repetition).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_sanitizer: Option<AddressSanitizer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_sanitizer_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undefined_behavior_sanitizer_enabled: Option<bool>,

    /// "random" or "lexical" (free-form, kept as written).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_execution_ordering: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_coverage: Option<CodeCoverage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_timeouts_enabled: Option<bool>,

    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_test_execution_time_allowance: Option<u64>,

    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_test_execution_time_allowance: Option<u64>,

    /// Raw repetition mode; see [`ExecutionOptions::repetition_mode`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_repetition_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_test_repetitions: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_variable_entries: Vec<EnvironmentVariableEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command_line_argument_entries: Vec<CommandLineArgumentEntry>,

    /// Keys without a typed field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExecutionOptions {
    /// Sanitizers switched on by these options, in a fixed order.
    pub fn sanitizers(&self) -> Vec<Sanitizer> {
        let mut enabled = Vec::new();
        if self
            .address_sanitizer
            .as_ref()
            .is_some_and(|asan| asan.enabled.unwrap_or(false))
        {
            enabled.push(Sanitizer::Address);
        }
        if self.thread_sanitizer_enabled.unwrap_or(false) {
            enabled.push(Sanitizer::Thread);
        }
        if self.undefined_behavior_sanitizer_enabled.unwrap_or(false) {
            enabled.push(Sanitizer::UndefinedBehavior);
        }
        enabled
    }

    /// Interpreted repetition mode. Unrecognized values yield `None`.
    pub fn repetition_mode(&self) -> Option<RepetitionMode> {
        match self.test_repetition_mode.as_deref()? {
            "retryOnFailure" => Some(RepetitionMode::RetryOnFailure),
            "untilFailure" => Some(RepetitionMode::UntilFailure),
            "fixedIterations" => Some(RepetitionMode::FixedIterations),
            _ => None,
        }
    }

    /// True when tests are ordered randomly.
    pub fn is_random_ordering(&self) -> bool {
        self.test_execution_ordering.as_deref() == Some("random")
    }

    /// Layer `over` on top of `self`: every key set in `over` wins.
    ///
    /// Entry lists are replaced wholesale when `over` has any.
    pub fn overlay(&self, over: &ExecutionOptions) -> ExecutionOptions {
        let mut extra = self.extra.clone();
        for (key, value) in &over.extra {
            extra.insert(key.clone(), value.clone());
        }
        ExecutionOptions {
            language: over.language.clone().or_else(|| self.language.clone()),
            region: over.region.clone().or_else(|| self.region.clone()),
            address_sanitizer: over
                .address_sanitizer
                .clone()
                .or_else(|| self.address_sanitizer.clone()),
            thread_sanitizer_enabled: over
                .thread_sanitizer_enabled
                .or(self.thread_sanitizer_enabled),
            undefined_behavior_sanitizer_enabled: over
                .undefined_behavior_sanitizer_enabled
                .or(self.undefined_behavior_sanitizer_enabled),
            test_execution_ordering: over
                .test_execution_ordering
                .clone()
                .or_else(|| self.test_execution_ordering.clone()),
            code_coverage: over
                .code_coverage
                .clone()
                .or_else(|| self.code_coverage.clone()),
            test_timeouts_enabled: over.test_timeouts_enabled.or(self.test_timeouts_enabled),
            default_test_execution_time_allowance: over
                .default_test_execution_time_allowance
                .or(self.default_test_execution_time_allowance),
            maximum_test_execution_time_allowance: over
                .maximum_test_execution_time_allowance
                .or(self.maximum_test_execution_time_allowance),
            test_repetition_mode: over
                .test_repetition_mode
                .clone()
                .or_else(|| self.test_repetition_mode.clone()),
            maximum_test_repetitions: over
                .maximum_test_repetitions
                .or(self.maximum_test_repetitions),
            environment_variable_entries: pick_entries(
                &over.environment_variable_entries,
                &self.environment_variable_entries,
            ),
            command_line_argument_entries: pick_entries(
                &over.command_line_argument_entries,
                &self.command_line_argument_entries,
            ),
            extra,
        }
    }
}

fn pick_entries<T: Clone>(over: &[T], base: &[T]) -> Vec<T> {
    if over.is_empty() {
        base.to_vec()
    } else {
        over.to_vec()
    }
}

/// Address sanitizer settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSanitizer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_stack_use_after_return: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Code coverage: either a plain switch or an explicit list of targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeCoverage {
    Enabled(bool),
    Targets(CoverageTargets),
}

impl CodeCoverage {
    pub fn is_enabled(&self) -> bool {
        match self {
            CodeCoverage::Enabled(enabled) => *enabled,
            CodeCoverage::Targets(_) => true,
        }
    }

    /// Targets gathering coverage; empty when coverage is a plain switch.
    pub fn targets(&self) -> &[TargetReference] {
        match self {
            CodeCoverage::Enabled(_) => &[],
            CodeCoverage::Targets(coverage) => &coverage.targets,
        }
    }
}

/// Coverage limited to a list of targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageTargets {
    pub targets: Vec<TargetReference>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An environment variable passed to the test process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariableEntry {
    pub key: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A command line argument passed to the test process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLineArgumentEntry {
    pub argument: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Runtime sanitizers a configuration can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sanitizer {
    Address,
    Thread,
    UndefinedBehavior,
}

impl Sanitizer {
    pub fn as_str(self) -> &'static str {
        match self {
            Sanitizer::Address => "address",
            Sanitizer::Thread => "thread",
            Sanitizer::UndefinedBehavior => "undefined_behavior",
        }
    }
}

/// How failing or passing tests are repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepetitionMode {
    /// Re-run a failing test up to the repetition limit.
    RetryOnFailure,
    /// Repeat until the first failure.
    UntilFailure,
    /// Run a fixed number of times.
    FixedIterations,
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
