//! "Last updated" stamp from `document.lastModified`.

#[cfg(test)]
#[path = "last_updated_test.rs"]
mod last_updated_test;

use sitefx::error::SetupError;
use sitefx::setup::SetupOutcome;

pub const STAMP_SELECTOR: &str = "#last-updated";

pub fn setup() -> Result<SetupOutcome, SetupError> {
    #[cfg(feature = "hydrate")]
    {
        use sitefx::stamp::format_last_modified;

        use crate::util::dom;

        let document = dom::document()?;
        let Some(stamp) = dom::query(&document, STAMP_SELECTOR)? else {
            return Ok(SetupOutcome::Skipped("no last-updated element"));
        };
        let text = format_last_modified(&document.last_modified())?;
        stamp.set_text_content(Some(&text));
        Ok(SetupOutcome::Installed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(SetupOutcome::Skipped(crate::util::BROWSER_ONLY))
    }
}
