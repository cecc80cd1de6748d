#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn setup_is_skipped_without_browser() {
    let outcome = setup("theme").expect("native setup never fails");
    assert_eq!(outcome, SetupOutcome::Skipped(crate::util::BROWSER_ONLY));
}

