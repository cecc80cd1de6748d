//! Per-component setup isolation.
//!
//! Page components install independently. A failing step is logged and
//! recorded, and the remaining steps still run.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use crate::error::SetupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    Installed,
    /// Nothing to wire on this page, e.g. the target element is absent.
    Skipped(&'static str),
}

pub struct SetupStep<'a> {
    pub name: &'static str,
    pub run: Box<dyn FnOnce() -> Result<SetupOutcome, SetupError> + 'a>,
}

impl<'a> SetupStep<'a> {
    pub fn new<F>(name: &'static str, run: F) -> Self
    where
        F: FnOnce() -> Result<SetupOutcome, SetupError> + 'a,
    {
        Self { name, run: Box::new(run) }
    }
}

#[derive(Debug, Default)]
pub struct SetupReport {
    pub installed: Vec<&'static str>,
    pub skipped: Vec<(&'static str, &'static str)>,
    pub failed: Vec<(&'static str, SetupError)>,
}

impl SetupReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every step in order, isolating failures.
pub fn run_isolated(steps: Vec<SetupStep<'_>>) -> SetupReport {
    let mut report = SetupReport::default();
    for step in steps {
        match (step.run)() {
            Ok(SetupOutcome::Installed) => {
                log::debug!("{} installed", step.name);
                report.installed.push(step.name);
            }
            Ok(SetupOutcome::Skipped(reason)) => {
                log::debug!("{} skipped: {reason}", step.name);
                report.skipped.push((step.name, reason));
            }
            Err(e) => {
                log::warn!("{} setup failed: {e}", step.name);
                report.failed.push((step.name, e));
            }
        }
    }
    report
}
