//! Shared constants for the page engine.

// ── Typewriter ──────────────────────────────────────────────────

/// Delay between typed characters.
pub const TYPING_DELAY_MS: u32 = 80;

/// Delay between erased characters. Faster than typing.
pub const ERASE_DELAY_MS: u32 = 40;

/// How long a completed phrase stays on screen before erasing starts.
pub const HOLD_DELAY_MS: u32 = 2500;

/// Pause between a fully erased phrase and the first character of the next.
pub const PAUSE_DELAY_MS: u32 = 500;

/// Headline phrases shown when no configuration overrides them.
pub const DEFAULT_PHRASES: [&str; 3] = [
    "The Techno-Builders",
    "Responsible Journalism",
    "Making Difference Beyond Words.",
];

// ── Scroll ──────────────────────────────────────────────────────

/// Cooldown for the scroll handler.
pub const SCROLL_THROTTLE_MS: u32 = 100;

/// A region reveals once its top edge is this far above the viewport bottom.
pub const REVEAL_OFFSET_PX: f64 = 100.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// ── Menu ────────────────────────────────────────────────────────

/// Class set on the navigation element while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "open";
