//! Mobile navigation menu.
//!
//! `.menu-toggle` opens and closes `.nav-links`; following a link or
//! pressing Escape closes it. State is mirrored to the `open` class on the
//! nav and `aria-expanded` on the button.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use sitefx::error::SetupError;
use sitefx::setup::SetupOutcome;

pub const BUTTON_SELECTOR: &str = ".menu-toggle";
pub const NAV_SELECTOR: &str = ".nav-links";
pub const LINK_SELECTOR: &str = ".nav-links a";

pub fn setup() -> Result<SetupOutcome, SetupError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use sitefx::consts::MENU_OPEN_CLASS;
        use sitefx::menu::MenuState;
        use wasm_bindgen::JsCast;
        use web_sys::{Element, KeyboardEvent};

        use crate::util::dom;

        struct Menu {
            button: Element,
            nav: Element,
            state: Cell<MenuState>,
        }

        impl Menu {
            fn update(&self, change: impl FnOnce(&mut MenuState) -> bool) {
                let mut state = self.state.get();
                if !change(&mut state) {
                    return;
                }
                self.state.set(state);
                dom::set_class(&self.nav, MENU_OPEN_CLASS, state.is_open());
                if let Err(e) = self.button.set_attribute("aria-expanded", state.aria_expanded()) {
                    log::warn!("failed to set aria-expanded: {e:?}");
                }
            }
        }

        let document = dom::document()?;
        let (Some(button), Some(nav)) = (dom::query(&document, BUTTON_SELECTOR)?, dom::query(&document, NAV_SELECTOR)?)
        else {
            return Ok(SetupOutcome::Skipped("no menu button or nav"));
        };
        let menu = Rc::new(Menu { button: button.clone(), nav, state: Cell::new(MenuState::default()) });
        menu.update(|_| true);

        let on_toggle = Rc::clone(&menu);
        dom::listen(&button, "click", move |_| {
            on_toggle.update(|state| {
                state.toggle();
                true
            });
        })?;

        for link in dom::query_all(&document, LINK_SELECTOR)? {
            let on_link = Rc::clone(&menu);
            dom::listen(&link, "click", move |_| on_link.update(MenuState::close))?;
        }

        let on_key = Rc::clone(&menu);
        dom::listen(&document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                on_key.update(MenuState::close);
            }
        })?;
        Ok(SetupOutcome::Installed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(SetupOutcome::Skipped(crate::util::BROWSER_ONLY))
    }
}
