use std::fmt;

use crate::core::types::ManageAction;
use crate::errors::{Error, Result};
use crate::sites::SiteManager;

/// One external call in a toggle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Enable(String),
    Disable(String),
    Reload,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Enable(name) => write!(f, "enable '{name}'"),
            Step::Disable(name) => write!(f, "disable '{name}'"),
            Step::Reload => write!(f, "reload"),
        }
    }
}

/// Names processed so far, in the order they were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
    pub reloaded: bool,
}

impl Applied {
    fn record(&mut self, step: Step) {
        match step {
            Step::Enable(name) => self.enabled.push(name),
            Step::Disable(name) => self.disabled.push(name),
            Step::Reload => self.reloaded = true,
        }
    }
}

/// Every enable, then every disable, then a single reload.
pub fn plan(to_enable: &[String], to_disable: &[String]) -> Vec<Step> {
    to_enable
        .iter()
        .cloned()
        .map(Step::Enable)
        .chain(to_disable.iter().cloned().map(Step::Disable))
        .chain(std::iter::once(Step::Reload))
        .collect()
}

/// Runs `plan(to_enable, to_disable)` one call at a time.
///
/// The first failing call stops the run: nothing after it is attempted and the
/// error comes back as `Error::Sequence` with the completed prefix attached.
pub fn apply<M: SiteManager + ?Sized>(
    manager: &mut M,
    to_enable: &[String],
    to_disable: &[String],
) -> Result<Applied> {
    let mut applied = Applied::default();
    for step in plan(to_enable, to_disable) {
        if let Err(err) = run_step(manager, &step) {
            return Err(Error::Sequence {
                step,
                completed: applied,
                source: Box::new(err),
            });
        }
        applied.record(step);
    }
    Ok(applied)
}

fn run_step<M: SiteManager + ?Sized>(manager: &mut M, step: &Step) -> Result<()> {
    match step {
        Step::Enable(name) => manager.enable_site(name),
        Step::Disable(name) => manager.disable_site(name),
        Step::Reload => manager.manage_server(ManageAction::Reload),
    }
}
