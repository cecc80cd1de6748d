//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger button click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Navigation link click or Escape. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Value for the button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
