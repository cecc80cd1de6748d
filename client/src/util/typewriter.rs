//! Headline typewriter.
//!
//! Drives the text of `.typewriter-text` with `setTimeout` ticks. The loop
//! runs for the lifetime of the page.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use sitefx::config::TypewriterConfig;
use sitefx::error::SetupError;
use sitefx::setup::SetupOutcome;

pub const TARGET_SELECTOR: &str = ".typewriter-text";

pub fn setup(config: &TypewriterConfig) -> Result<SetupOutcome, SetupError> {
    config.validate()?;
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use sitefx::typewriter::Typewriter;

        use crate::util::dom;

        let document = dom::document()?;
        let Some(target) = dom::query(&document, TARGET_SELECTOR)? else {
            return Ok(SetupOutcome::Skipped("no typewriter target"));
        };
        let typewriter = Typewriter::new(config, Rc::new(dom::ElementText::new(target)), Rc::new(dom::TimeoutScheduler));
        if !typewriter.start() {
            return Ok(SetupOutcome::Skipped("typewriter idle"));
        }
        Ok(SetupOutcome::Installed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(SetupOutcome::Skipped(crate::util::BROWSER_ONLY))
    }
}
