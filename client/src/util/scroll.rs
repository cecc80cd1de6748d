//! Scroll reveal and scroll-to-top button.
//!
//! `.reveal` regions gain the `active` class the first time they scroll far
//! enough into view and keep it. The `.scroll-top` button is shown past a
//! scroll offset and scrolls smoothly back to the top when clicked. The
//! scroll handler is throttled; one update also runs at setup so regions
//! already in view reveal without scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use sitefx::config::ScrollConfig;
use sitefx::error::SetupError;
use sitefx::setup::SetupOutcome;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_ACTIVE_CLASS: &str = "active";
pub const SCROLL_TOP_SELECTOR: &str = ".scroll-top";

pub fn setup(config: &ScrollConfig) -> Result<SetupOutcome, SetupError> {
    config.validate()?;
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use sitefx::host::Scheduler;
        use sitefx::throttle::throttle;
        use wasm_bindgen::JsCast;
        use web_sys::{ScrollBehavior, ScrollToOptions};

        use crate::util::dom;

        let window = dom::window()?;
        let document = dom::document()?;
        let regions = dom::query_all(&document, REVEAL_SELECTOR)?;
        let button = dom::query(&document, SCROLL_TOP_SELECTOR)?
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if regions.is_empty() && button.is_none() {
            return Ok(SetupOutcome::Skipped("no reveal regions or scroll-to-top button"));
        }

        let effects = Rc::new(browser::ScrollEffects::new(window.clone(), regions, button.clone(), config));
        effects.refresh();

        let scheduler: Rc<dyn Scheduler> = Rc::new(dom::TimeoutScheduler);
        let handler = Rc::clone(&effects);
        let mut on_scroll = throttle(move |_: web_sys::Event| handler.refresh(), config.throttle_ms, scheduler)?;
        dom::listen(&window, "scroll", move |event| on_scroll(event))?;

        if let Some(button) = button {
            let window = window.clone();
            dom::listen(&button, "click", move |_| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?;
        }
        Ok(SetupOutcome::Installed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(SetupOutcome::Skipped(crate::util::BROWSER_ONLY))
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use sitefx::config::ScrollConfig;
    use sitefx::reveal::{RevealTracker, scroll_top_visible};
    use web_sys::{Element, HtmlElement, Window};

    use super::REVEAL_ACTIVE_CLASS;
    use crate::util::dom;

    pub(super) struct ScrollEffects {
        window: Window,
        regions: Vec<Element>,
        tracker: RefCell<RevealTracker>,
        button: Option<HtmlElement>,
        scroll_top_threshold_px: f64,
    }

    impl ScrollEffects {
        pub(super) fn new(
            window: Window,
            regions: Vec<Element>,
            button: Option<HtmlElement>,
            config: &ScrollConfig,
        ) -> Self {
            let tracker = RefCell::new(RevealTracker::new(regions.len(), config.reveal_offset_px));
            Self { window, regions, tracker, button, scroll_top_threshold_px: config.scroll_top_threshold_px }
        }

        pub(super) fn refresh(&self) {
            self.reveal_regions();
            self.sync_button();
        }

        fn reveal_regions(&self) {
            let mut tracker = self.tracker.borrow_mut();
            if tracker.is_complete() {
                return;
            }
            let viewport_height = self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let regions = &self.regions;
            for index in tracker.update(viewport_height, |i| regions[i].get_bounding_client_rect().top()) {
                dom::set_class(&regions[index], REVEAL_ACTIVE_CLASS, true);
            }
        }

        fn sync_button(&self) {
            let Some(button) = &self.button else {
                return;
            };
            let scroll_y = self.window.scroll_y().unwrap_or(0.0);
            let display = if scroll_top_visible(scroll_y, self.scroll_top_threshold_px) { "block" } else { "none" };
            if let Err(e) = button.style().set_property("display", display) {
                log::warn!("failed to update scroll-to-top button: {e:?}");
            }
        }
    }
}
