// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Targets command implementation.

use testplan::cli::{Cli, PlanArgs};
use testplan::report;
use testplan::workspace::{ProjectConfig, Selection, Workspace};

/// Run the targets command.
pub fn run(cli: &Cli, args: &PlanArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let project = ProjectConfig::load(cli.config.as_deref(), &cwd)?;
    let selection = Selection {
        plan: args.plan.as_deref(),
        target: None,
    };
    let workspace = Workspace::open(project, args.paths.clone(), &cwd, &selection)?;
    let plan = workspace.plan()?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::formatter(cli.output).targets(&mut handle, plan)
}
