//! Deterministic traces on the virtual clock.
//!
//! `record_typewriter` runs the typewriter until a number of full phrase
//! cycles have been typed and erased, capturing every display change with
//! its virtual timestamp. `simulate_throttle` replays call times through a
//! throttle and reports, call by call, whether each one executed.

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use sitefx::clock::ManualClock;
use sitefx::config::TypewriterConfig;
use sitefx::error::ConfigError;
use sitefx::host::TextSurface;
use sitefx::throttle::Throttle;
use sitefx::typewriter::{Typewriter, TypewriterCore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub at_ms: u64,
    pub text: String,
}

struct RecordingSurface {
    clock: ManualClock,
    snapshots: RefCell<Vec<Snapshot>>,
}

impl TextSurface for RecordingSurface {
    fn text(&self) -> String {
        self.snapshots
            .borrow()
            .last()
            .map(|s| s.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.snapshots
            .borrow_mut()
            .push(Snapshot { at_ms: self.clock.now_ms(), text: text.to_owned() });
    }
}

/// Snapshots for `cycles` passes over the whole phrase list.
pub fn record_typewriter(config: &TypewriterConfig, cycles: usize) -> Result<Vec<Snapshot>, ConfigError> {
    let phrase_count = TypewriterCore::new(config)?.phrase_count();
    let target = target_erasures(cycles, phrase_count);

    let clock = ManualClock::new();
    let surface = Rc::new(RecordingSurface { clock: clock.clone(), snapshots: RefCell::new(Vec::new()) });
    let typewriter = Typewriter::new(config, surface.clone(), Rc::new(clock.clone()));
    typewriter.start();

    let erasures = || {
        surface
            .snapshots
            .borrow()
            .iter()
            .filter(|s| s.text.is_empty())
            .count()
    };
    while erasures() < target {
        if clock.run_next().is_none() {
            break;
        }
    }
    let discarded = clock.clear();
    tracing::debug!(cycles, at_ms = clock.now_ms(), discarded, "trace complete");
    let snapshots = surface.snapshots.borrow().clone();
    Ok(snapshots)
}

/// Every erasure ends with an empty display, so one full cycle is one
/// erasure per phrase.
fn target_erasures(cycles: usize, phrase_count: usize) -> usize {
    cycles.saturating_mul(phrase_count)
}

/// One throttle decision per call, in call-time order.
pub fn simulate_throttle(cooldown_ms: u32, calls: &[u64]) -> Result<Vec<(u64, bool)>, ConfigError> {
    let clock = ManualClock::new();
    let mut gate = Throttle::new(|_: u64| {}, cooldown_ms, Rc::new(clock.clone()))?;

    let mut sorted = calls.to_vec();
    sorted.sort_unstable();
    let decisions = sorted
        .into_iter()
        .map(|at| {
            clock.advance_to(at);
            (at, gate.call(at))
        })
        .collect();
    clock.clear();
    Ok(decisions)
}
