// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::Write;

use super::{CheckedTest, Formatter};
use crate::inclusion::{Reason, SelectionPolicy};
use crate::plan::{ParsedPlan, TestTargetConfig};
use crate::repository::PlanRepository;

/// Human-readable formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn plans(&self, out: &mut dyn Write, repo: &PlanRepository) -> anyhow::Result<()> {
        for plan in repo.plans() {
            let count = plan.plan.test_targets.len();
            let noun = if count == 1 { "target" } else { "targets" };
            writeln!(
                out,
                "{}: {} {} ({})",
                plan.name,
                count,
                noun,
                plan.path.display()
            )?;
        }
        if !repo.failures().is_empty() {
            writeln!(out, "{} skipped", repo.failures().len())?;
        }
        Ok(())
    }

    fn targets(&self, out: &mut dyn Write, plan: &ParsedPlan) -> anyhow::Result<()> {
        for name in plan.target_names() {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }

    fn decisions(
        &self,
        out: &mut dyn Write,
        plan: &ParsedPlan,
        target: &TestTargetConfig,
        checked: &[CheckedTest<'_>],
    ) -> anyhow::Result<()> {
        writeln!(
            out,
            "{} / {} ({})",
            plan.name,
            target.name(),
            describe_policy(&target.policy())
        )?;
        for item in checked {
            let verdict = if item.decision.included {
                "included"
            } else {
                "excluded"
            };
            writeln!(
                out,
                "  {verdict}: {} ({})",
                item.test,
                describe_reason(&item.decision.reason)
            )?;
        }
        Ok(())
    }
}

fn describe_policy(policy: &SelectionPolicy<'_>) -> String {
    match policy {
        SelectionPolicy::Select(entries) => format!("{} selected", entries.len()),
        SelectionPolicy::Skip(entries) => format!("{} skipped", entries.len()),
        SelectionPolicy::All => "all tests".to_string(),
    }
}

fn describe_reason(reason: &Reason) -> String {
    match reason {
        Reason::Selected(entry) => format!("selected by {entry}"),
        Reason::NotSelected => "not selected".to_string(),
        Reason::Skipped(entry) => format!("skipped by {entry}"),
        Reason::NotSkipped => "not skipped".to_string(),
        Reason::AllTests => "all tests run".to_string(),
    }
}
