// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading plans for a command invocation.
//!
//! Combines config, the plan repository and the session: config supplies
//! defaults and exclusions, flags override config. Loading never fails on a
//! bad plan; only an explicit selection that cannot be satisfied does.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::{self, Config};
use crate::discovery::{self, ProjectRoot};
use crate::plan::{ParsedPlan, TestTargetConfig};
use crate::repository::PlanRepository;
use crate::session::Session;

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;

/// Config together with the root it was found at.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config: Config,
    pub project: ProjectRoot,
}

impl ProjectConfig {
    /// Resolve config: explicit path, else discovered from `cwd`, else defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let project = match explicit {
            Some(path) => ProjectRoot::for_config(path, cwd),
            None => discovery::locate(cwd),
        };
        let config = match &project.config {
            Some(path) => {
                tracing::debug!("using config {}", path.display());
                config::load(path)?
            }
            None => Config::default(),
        };
        Ok(Self { config, project })
    }
}

/// Plans loaded for one command plus the active selection.
pub struct Workspace {
    pub config: Config,
    pub project: ProjectRoot,
    pub repo: PlanRepository,
    pub session: Session,
}

/// Explicit selections from the command line.
#[derive(Debug, Default)]
pub struct Selection<'a> {
    pub plan: Option<&'a str>,
    pub target: Option<&'a str>,
}

impl Workspace {
    /// Load `candidates` (relative to `cwd`) that the config does not exclude.
    pub fn load(project: ProjectConfig, candidates: Vec<PathBuf>, cwd: &Path) -> Self {
        let ProjectConfig { config, project } = project;
        let candidates = config.filter_candidates(candidates, &project, cwd);
        Self {
            repo: PlanRepository::load(&candidates),
            config,
            project,
            session: Session::new(),
        }
    }

    /// Choose plan and target: flags, then config, then the first plan.
    ///
    /// Fails if a plan is requested by name and none has that name.
    pub fn select(&mut self, selection: &Selection<'_>) -> anyhow::Result<()> {
        self.session.clear();
        let plan_name = selection.plan.or(self.config.plan.as_deref());
        let plan = match plan_name {
            Some(name) => Some(
                self.repo
                    .find_plan(name)
                    .with_context(|| format!("no test plan named `{name}`"))?,
            ),
            None => self.repo.plans().first(),
        };
        if let Some(plan) = plan {
            self.session.select_plan(plan);
        }
        if let Some(target) = selection.target.or(self.config.target.as_deref()) {
            self.session.select_target(target);
        }
        Ok(())
    }

    /// `load` followed by `select`.
    pub fn open(
        project: ProjectConfig,
        candidates: Vec<PathBuf>,
        cwd: &Path,
        selection: &Selection<'_>,
    ) -> anyhow::Result<Self> {
        let mut workspace = Self::load(project, candidates, cwd);
        workspace.select(selection)?;
        Ok(workspace)
    }

    /// The selected plan.
    pub fn plan(&self) -> anyhow::Result<&ParsedPlan> {
        self.session
            .plan(&self.repo)
            .context("no test plans loaded")
    }

    /// The selected target within the selected plan.
    pub fn target(&self) -> anyhow::Result<&TestTargetConfig> {
        let plan = self.plan()?;
        let name = self
            .session
            .target_name()
            .context("no target selected; pass --target or set `target` in testplan.toml")?;
        plan.find_target(name)
            .with_context(|| format!("no target named `{}` in plan `{}`", name, plan.name))
    }
}
