//! Page enhancement engine for a static marketing site.
//!
//! This crate holds every piece of behaviour that does not need a browser:
//! the typewriter state machine, the throttle gate, one-shot scroll reveal,
//! theme preference, menu state, and the "last updated" stamp. Browser
//! concerns are reached only through the capability traits in [`host`], so
//! the `client` crate binds them to the DOM and tests bind them to
//! [`clock::ManualClock`] and in-memory surfaces.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | Scheduler, text surface, and preference store capabilities |
//! | [`clock`] | Virtual-time scheduler for tests and traces |
//! | [`throttle`] | Leading-edge, drop-only call gate |
//! | [`typewriter`] | Type/erase animation: pure [`typewriter::TypewriterCore`] and timer-driven [`typewriter::Typewriter`] |
//! | [`reveal`] | One-shot reveal tracking and scroll-to-top visibility |
//! | [`theme`] | Light/dark preference |
//! | [`menu`] | Mobile navigation open/closed state |
//! | [`stamp`] | "Last updated" formatting |
//! | [`config`] | Typed configuration with defaults and validation |
//! | [`setup`] | Per-component setup isolation |
//! | [`error`] | Error types |
//! | [`consts`] | Default delays, thresholds, and keys |

pub mod clock;
pub mod config;
pub mod consts;
pub mod error;
pub mod host;
pub mod menu;
pub mod reveal;
pub mod setup;
pub mod stamp;
pub mod theme;
pub mod throttle;
pub mod typewriter;
