// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List command implementation.

use testplan::cli::{Cli, ListArgs};
use testplan::report;
use testplan::workspace::{ProjectConfig, Workspace};

/// Run the list command. Lists whatever loaded; no plan is selected.
pub fn run(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let project = ProjectConfig::load(cli.config.as_deref(), &cwd)?;
    let workspace = Workspace::load(project, args.paths.clone(), &cwd);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::formatter(cli.output).plans(&mut handle, &workspace.repo)
}
