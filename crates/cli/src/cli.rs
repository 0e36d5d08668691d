// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve which tests run for a build target from test plans
#[derive(Parser)]
#[command(name = "testplan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TESTPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the test plans that parse
    List(ListArgs),
    /// List the targets of a plan
    Targets(PlanArgs),
    /// Decide whether tests run under a target
    Check(CheckArgs),
    /// Print a plan as JSON
    Show(ShowArgs),
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Test plan files
    #[arg(value_name = "PLAN")]
    pub paths: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct PlanArgs {
    /// Test plan files
    #[arg(value_name = "PLAN")]
    pub paths: Vec<PathBuf>,

    /// Plan to use, by name (default: config, then the first plan)
    #[arg(long = "plan", value_name = "NAME")]
    pub plan: Option<String>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub plans: PlanArgs,

    /// Target to resolve against (default: config)
    #[arg(long, short = 't', value_name = "NAME")]
    pub target: Option<String>,

    /// Test identifier (`Class`, `Class/method` or `Class.method`)
    #[arg(long = "test", value_name = "ID", required = true)]
    pub tests: Vec<String>,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub plans: PlanArgs,

    /// Print the effective options of this configuration instead
    #[arg(long, value_name = "NAME")]
    pub configuration: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
