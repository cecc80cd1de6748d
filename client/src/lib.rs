//! # client
//!
//! WebAssembly entry point for the marketing site. Binds the `sitefx` engine
//! to the page: theme toggle, scroll reveal, typewriter headline, mobile
//! menu, and the "last updated" stamp.
//!
//! Browser code is compiled only with the `hydrate` feature. Without it every
//! setup step reports itself as skipped, which keeps the crate buildable and
//! testable on native targets.

pub mod setup;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("sitefx logger unavailable: {e}").into());
    }

    let report = setup::init_all();
    log::info!(
        "sitefx ready: {} installed, {} skipped, {} failed",
        report.installed.len(),
        report.skipped.len(),
        report.failed.len()
    );
}
