use std::cell::RefCell;

use super::*;
use crate::clock::ManualClock;

fn counting_throttle(clock: &ManualClock, cooldown_ms: u32) -> (Throttle<impl FnMut(u64)>, Rc<RefCell<Vec<u64>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let gate = Throttle::new(move |at: u64| sink.borrow_mut().push(at), cooldown_ms, Rc::new(clock.clone()))
        .expect("positive cooldown");
    (gate, calls)
}

fn call_at(clock: &ManualClock, gate: &mut Throttle<impl FnMut(u64)>, times: &[u64]) {
    for &t in times {
        clock.advance_to(t);
        gate.call(t);
    }
}

#[test]
fn executes_on_leading_edge_only() {
    let clock = ManualClock::new();
    let (mut gate, calls) = counting_throttle(&clock, 100);
    call_at(&clock, &mut gate, &[0, 10, 50, 150]);
    assert_eq!(*calls.borrow(), vec![0, 150]);
}

#[test]
fn burst_inside_one_window_runs_once() {
    let clock = ManualClock::new();
    let (mut gate, calls) = counting_throttle(&clock, 100);
    let burst: Vec<u64> = (0..50).map(|i| i * 2).collect();
    call_at(&clock, &mut gate, &burst);
    assert_eq!(*calls.borrow(), vec![0]);
}

#[test]
fn calls_spaced_beyond_cooldown_all_run() {
    let clock = ManualClock::new();
    let (mut gate, calls) = counting_throttle(&clock, 100);
    call_at(&clock, &mut gate, &[0, 101, 202, 303, 404]);
    assert_eq!(calls.borrow().len(), 5);
}

#[test]
fn dropped_calls_are_not_replayed_after_window() {
    let clock = ManualClock::new();
    let (mut gate, calls) = counting_throttle(&clock, 100);
    call_at(&clock, &mut gate, &[0, 40, 90]);
    clock.advance(1_000);
    assert_eq!(*calls.borrow(), vec![0]);
    assert!(!gate.is_suppressed());
}

#[test]
fn call_reports_whether_it_ran() {
    let clock = ManualClock::new();
    let (mut gate, _calls) = counting_throttle(&clock, 100);
    assert!(gate.call(0));
    assert!(gate.is_suppressed());
    assert!(!gate.call(1));
    clock.advance(100);
    assert!(gate.call(100));
}

#[test]
fn suppressed_call_schedules_nothing() {
    let clock = ManualClock::new();
    let (mut gate, _calls) = counting_throttle(&clock, 100);
    gate.call(0);
    gate.call(1);
    gate.call(2);
    assert_eq!(clock.pending(), 1);
}

#[test]
fn instances_do_not_share_gates() {
    let clock = ManualClock::new();
    let (mut a, calls_a) = counting_throttle(&clock, 100);
    let (mut b, calls_b) = counting_throttle(&clock, 100);
    a.call(0);
    b.call(0);
    assert_eq!(calls_a.borrow().len(), 1);
    assert_eq!(calls_b.borrow().len(), 1);
}

#[test]
fn zero_cooldown_is_a_config_error() {
    let clock = ManualClock::new();
    let result = Throttle::new(|_: ()| {}, 0, Rc::new(clock));
    assert!(matches!(result, Err(ConfigError::NonPositiveDelay { name: "cooldown_ms" })));
}

#[test]
fn closure_form_keeps_signature() {
    let clock = ManualClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut on_scroll = throttle(move |(x, y): (i32, i32)| sink.borrow_mut().push(x + y), 50, Rc::new(clock.clone()))
        .expect("positive cooldown");
    on_scroll((1, 2));
    on_scroll((3, 4));
    clock.advance(50);
    on_scroll((5, 6));
    assert_eq!(*seen.borrow(), vec![3, 11]);
}
