//! Theme toggle.
//!
//! Reads the stored theme from `localStorage` and applies it: the
//! `dark-mode` class on `<body>` and the label of `#darkModeToggle`. A click
//! flips the theme based on the class currently on `<body>` and writes the
//! new preference back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort; without storage the toggle still works for
//! the current page.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use sitefx::error::SetupError;
use sitefx::setup::SetupOutcome;

pub const TOGGLE_ID: &str = "darkModeToggle";

/// Apply the stored theme and wire the toggle button.
pub fn setup(theme_key: &str) -> Result<SetupOutcome, SetupError> {
    #[cfg(feature = "hydrate")]
    {
        use sitefx::consts::DARK_MODE_CLASS;
        use sitefx::theme::{self, Theme};

        use crate::util::dom;

        let document = dom::document()?;
        let Some(button) = document.get_element_by_id(TOGGLE_ID) else {
            return Ok(SetupOutcome::Skipped("no theme toggle button"));
        };
        let body = document
            .body()
            .ok_or_else(|| SetupError::Host("document has no body".to_owned()))?;
        let store = dom::LocalStore::open();
        let initial = theme::load(&store, theme_key);
        let key = theme_key.to_owned();

        let apply = {
            let body = body.clone();
            let button = button.clone();
            move |theme: Theme| {
                dom::set_class(&body, DARK_MODE_CLASS, theme.is_dark());
                button.set_text_content(Some(theme.toggle_label()));
                theme::save(&store, &key, theme);
            }
        };
        apply(initial);

        dom::listen(&button, "click", move |_| {
            let current = if body.class_list().contains(DARK_MODE_CLASS) { Theme::Dark } else { Theme::Light };
            apply(current.toggled());
        })?;
        Ok(SetupOutcome::Installed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme_key;
        Ok(SetupOutcome::Skipped(crate::util::BROWSER_ONLY))
    }
}
