use std::cell::RefCell;

use super::*;

#[test]
fn regions_activate_once_above_threshold() {
    let mut tracker = RevealTracker::new(3, 100.0);
    let tops = [50.0, 650.0, 1200.0];
    let activated = tracker.update(800.0, |i| tops[i]);
    assert_eq!(activated, vec![0, 1]);
    assert_eq!(tracker.state(2), Some(RevealState::Hidden));
    assert_eq!(tracker.remaining(), 1);
    assert!(!tracker.is_complete());
}

#[test]
fn activation_never_reverts() {
    let mut tracker = RevealTracker::new(1, 100.0);
    assert_eq!(tracker.update(800.0, |_| 10.0), vec![0]);
    // Scrolled back up: region is now below the fold again.
    assert!(tracker.update(800.0, |_| 5_000.0).is_empty());
    assert_eq!(tracker.state(0), Some(RevealState::Active));
}

#[test]
fn active_regions_are_not_queried_again() {
    let mut tracker = RevealTracker::new(2, 100.0);
    let queried = RefCell::new(Vec::new());
    tracker.update(800.0, |i| {
        queried.borrow_mut().push(i);
        if i == 0 { 0.0 } else { 2_000.0 }
    });
    queried.borrow_mut().clear();
    tracker.update(800.0, |i| {
        queried.borrow_mut().push(i);
        2_000.0
    });
    assert_eq!(*queried.borrow(), vec![1]);
}

#[test]
fn threshold_is_strict() {
    assert!(!crosses_threshold(700.0, 800.0, 100.0));
    assert!(crosses_threshold(699.9, 800.0, 100.0));
}

#[test]
fn completes_when_all_active() {
    let mut tracker = RevealTracker::new(2, 0.0);
    tracker.update(500.0, |_| 0.0);
    assert!(tracker.is_complete());
    assert_eq!(tracker.remaining(), 0);
}

#[test]
fn empty_tracker_is_complete() {
    let tracker = RevealTracker::new(0, 100.0);
    assert!(tracker.is_empty());
    assert!(tracker.is_complete());
}

#[test]
fn scroll_top_button_threshold() {
    assert!(!scroll_top_visible(0.0, 300.0));
    assert!(!scroll_top_visible(300.0, 300.0));
    assert!(scroll_top_visible(301.0, 300.0));
}
