// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Show command implementation.

use std::io::Write;

use anyhow::Context;

use testplan::cli::{Cli, ShowArgs};
use testplan::workspace::{ProjectConfig, Selection, Workspace};

/// Run the show command. Always prints JSON.
pub fn run(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let project = ProjectConfig::load(cli.config.as_deref(), &cwd)?;
    let selection = Selection {
        plan: args.plans.plan.as_deref(),
        target: None,
    };
    let workspace = Workspace::open(project, args.plans.paths.clone(), &cwd, &selection)?;
    let plan = workspace.plan()?;

    let content = match &args.configuration {
        Some(name) => {
            let options = plan.plan.effective_options(name).with_context(|| {
                format!("no configuration named `{}` in plan `{}`", name, plan.name)
            })?;
            serde_json::to_string_pretty(&options)?
        }
        None => plan.plan.to_json_pretty()?,
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{content}")?;
    Ok(())
}
