//! Component wiring for the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module binds one `sitefx` component to the DOM. Browser-only code is
//! gated behind `hydrate`; native builds report the step as skipped.

pub mod config;
pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod last_updated;
pub mod menu;
pub mod scroll;
pub mod typewriter;

/// Skip reason reported by every step on native builds.
pub const BROWSER_ONLY: &str = "requires a browser";
