//! Light/dark theme preference.
//!
//! The preference is one key in a [`PreferenceStore`]. Missing or
//! unrecognized values load as [`Theme::Light`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::host::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle button label: names the theme a click would switch to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark Mode",
            Self::Dark => "☀️ Light Mode",
        }
    }
}

/// Read the stored theme, defaulting to light.
pub fn load(store: &dyn PreferenceStore, key: &str) -> Theme {
    store
        .get(key)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

pub fn save(store: &dyn PreferenceStore, key: &str, theme: Theme) {
    store.set(key, theme.as_str());
}
