// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command output in text or JSON format.

mod json;
mod text;

use std::io::Write;

use crate::cli::OutputFormat;
use crate::inclusion::Decision;
use crate::plan::{ParsedPlan, TestTargetConfig};
use crate::repository::PlanRepository;

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// One resolved test identifier.
#[derive(Debug, Clone)]
pub struct CheckedTest<'a> {
    /// Identifier as given on the command line.
    pub test: &'a str,
    pub decision: Decision,
}

/// Writes command results in one output format.
pub trait Formatter {
    /// Loaded plans and skipped candidates.
    fn plans(&self, out: &mut dyn Write, repo: &PlanRepository) -> anyhow::Result<()>;

    /// Target names of one plan.
    fn targets(&self, out: &mut dyn Write, plan: &ParsedPlan) -> anyhow::Result<()>;

    /// Inclusion decisions for a target.
    fn decisions(
        &self,
        out: &mut dyn Write,
        plan: &ParsedPlan,
        target: &TestTargetConfig,
        checked: &[CheckedTest<'_>],
    ) -> anyhow::Result<()>;
}

/// Formatter for `format`.
pub fn formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
