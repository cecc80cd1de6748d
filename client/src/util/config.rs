//! Page-supplied configuration.
//!
//! A page may embed `<script type="application/json" id="sitefx-config">`
//! to override phrases, delays, or thresholds. Anything missing falls back
//! to the engine defaults; an invalid block is logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use sitefx::config::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "sitefx-config";

/// Resolve configuration from the raw JSON block, if any.
pub fn parse_inline(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json_str(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            SiteConfig::default()
        }
    }
}

/// Read configuration from the current page.
pub fn load() -> SiteConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse_inline(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        parse_inline(None)
    }
}
