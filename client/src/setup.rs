//! Page initialization.
//!
//! Each component is wired by its own step so one broken element or
//! misconfiguration leaves the rest of the page interactive.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use sitefx::setup::{SetupReport, SetupStep, run_isolated};

use crate::util::{config, dark_mode, last_updated, menu, scroll, typewriter};

/// Wire every component on the current page.
pub fn init_all() -> SetupReport {
    let config = config::load();
    run_isolated(vec![
        SetupStep::new("theme", || dark_mode::setup(&config.theme_key)),
        SetupStep::new("scroll", || scroll::setup(&config.scroll)),
        SetupStep::new("typewriter", || typewriter::setup(&config.typewriter)),
        SetupStep::new("menu", menu::setup),
        SetupStep::new("last_updated", last_updated::setup),
    ])
}
