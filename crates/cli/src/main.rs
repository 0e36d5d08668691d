// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;
mod cmd_list;
mod cmd_show;
mod cmd_targets;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use testplan::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::List(args) => cmd_list::run(&cli, args),
        Command::Targets(args) => cmd_targets::run(&cli, args),
        Command::Check(args) => cmd_check::run(&cli, args),
        Command::Show(args) => cmd_show::run(&cli, args),
    }
}

/// Log to stderr. `TESTPLAN_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "testplan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TESTPLAN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
