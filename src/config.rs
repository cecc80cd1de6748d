//! Typed configuration for the page components.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration. Validation runs separately: components that receive an
//! invalid configuration stay idle rather than fault.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_PHRASES, ERASE_DELAY_MS, HOLD_DELAY_MS, PAUSE_DELAY_MS, REVEAL_OFFSET_PX, SCROLL_THROTTLE_MS,
    SCROLL_TOP_THRESHOLD_PX, THEME_STORAGE_KEY, TYPING_DELAY_MS,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub typewriter: TypewriterConfig,
    pub scroll: ScrollConfig,
    pub theme_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typewriter: TypewriterConfig::default(),
            scroll: ScrollConfig::default(),
            theme_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.typewriter.validate()?;
        self.scroll.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub typing_ms: u32,
    pub erase_ms: u32,
    pub hold_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            typing_ms: TYPING_DELAY_MS,
            erase_ms: ERASE_DELAY_MS,
            hold_ms: HOLD_DELAY_MS,
            pause_ms: PAUSE_DELAY_MS,
        }
    }
}

impl TypewriterConfig {
    /// Reject empty phrase lists, empty phrases, and zero delays.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(index) = self.phrases.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyPhrase { index });
        }
        positive("typing_ms", self.typing_ms)?;
        positive("erase_ms", self.erase_ms)?;
        positive("hold_ms", self.hold_ms)?;
        positive("pause_ms", self.pause_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub throttle_ms: u32,
    pub reveal_offset_px: f64,
    pub scroll_top_threshold_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            throttle_ms: SCROLL_THROTTLE_MS,
            reveal_offset_px: REVEAL_OFFSET_PX,
            scroll_top_threshold_px: SCROLL_TOP_THRESHOLD_PX,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("throttle_ms", self.throttle_ms)
    }
}

pub(crate) fn positive(name: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositiveDelay { name });
    }
    Ok(())
}
