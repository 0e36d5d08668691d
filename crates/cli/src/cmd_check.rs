// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use testplan::cli::{CheckArgs, Cli};
use testplan::inclusion;
use testplan::report::{self, CheckedTest};
use testplan::workspace::{ProjectConfig, Selection, Workspace};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let project = ProjectConfig::load(cli.config.as_deref(), &cwd)?;
    let selection = Selection {
        plan: args.plans.plan.as_deref(),
        target: args.target.as_deref(),
    };
    let workspace = Workspace::open(project, args.plans.paths.clone(), &cwd, &selection)?;
    let plan = workspace.plan()?;
    let target = workspace.target()?;

    let checked: Vec<CheckedTest<'_>> = args
        .tests
        .iter()
        .map(|test| CheckedTest {
            test: test.as_str(),
            decision: inclusion::decide(test, target),
        })
        .collect();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::formatter(cli.output).decisions(&mut handle, plan, target, &checked)
}
