#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn setup_is_skipped_without_browser() {
    assert_eq!(setup().expect("native setup never fails"), SetupOutcome::Skipped(crate::util::BROWSER_ONLY));
}
