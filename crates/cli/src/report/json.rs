// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::Write;

use serde_json::json;

use super::{CheckedTest, Formatter};
use crate::inclusion::SelectionPolicy;
use crate::plan::{ParsedPlan, TestTargetConfig};
use crate::repository::PlanRepository;

/// JSON formatter; one document per command.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn plans(&self, out: &mut dyn Write, repo: &PlanRepository) -> anyhow::Result<()> {
        let plans: Vec<_> = repo
            .plans()
            .iter()
            .map(|plan| {
                json!({
                    "name": plan.name,
                    "path": plan.path,
                    "targets": plan.target_names(),
                })
            })
            .collect();
        let failures: Vec<_> = repo
            .failures()
            .iter()
            .map(|failure| {
                json!({
                    "path": failure.path,
                    "error": failure.error.to_string(),
                })
            })
            .collect();
        write_json(out, &json!({ "plans": plans, "failures": failures }))
    }

    fn targets(&self, out: &mut dyn Write, plan: &ParsedPlan) -> anyhow::Result<()> {
        write_json(
            out,
            &json!({
                "plan": plan.name,
                "targets": plan.target_names(),
            }),
        )
    }

    fn decisions(
        &self,
        out: &mut dyn Write,
        plan: &ParsedPlan,
        target: &TestTargetConfig,
        checked: &[CheckedTest<'_>],
    ) -> anyhow::Result<()> {
        let mode = match target.policy() {
            SelectionPolicy::Select(_) => "select",
            SelectionPolicy::Skip(_) => "skip",
            SelectionPolicy::All => "all",
        };
        let tests: Vec<_> = checked
            .iter()
            .map(|item| {
                json!({
                    "test": item.test,
                    "included": item.decision.included,
                    "reason": item.decision.reason,
                })
            })
            .collect();
        write_json(
            out,
            &json!({
                "plan": plan.name,
                "target": target.name(),
                "mode": mode,
                "tests": tests,
            }),
        )
    }
}

fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
