#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn native_build_skips_every_step() {
    let report = init_all();
    assert!(report.is_clean());
    assert!(report.installed.is_empty());
    let names: Vec<&str> = report.skipped.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["theme", "scroll", "typewriter", "menu", "last_updated"]);
}
