//! Leading-edge call throttle.
//!
//! The first call runs the callback immediately and closes the gate; calls
//! that arrive while the gate is closed are dropped outright. A one-shot
//! timer reopens the gate when the cooldown elapses. There is no trailing
//! call at the end of the window.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::positive;
use crate::error::ConfigError;
use crate::host::Scheduler;

pub struct Throttle<F> {
    callback: F,
    cooldown_ms: u32,
    suppressed: Rc<Cell<bool>>,
    scheduler: Rc<dyn Scheduler>,
}

impl<F> Throttle<F> {
    /// Wrap `callback` so it runs at most once per `cooldown_ms`.
    pub fn new(callback: F, cooldown_ms: u32, scheduler: Rc<dyn Scheduler>) -> Result<Self, ConfigError> {
        positive("cooldown_ms", cooldown_ms)?;
        Ok(Self {
            callback,
            cooldown_ms,
            suppressed: Rc::new(Cell::new(false)),
            scheduler,
        })
    }

    #[must_use]
    pub fn cooldown_ms(&self) -> u32 {
        self.cooldown_ms
    }

    /// Whether calls are currently being dropped.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Forward `arg` to the callback unless a cooldown window is open.
    /// Returns whether the callback ran.
    pub fn call<A>(&mut self, arg: A) -> bool
    where
        F: FnMut(A),
    {
        if self.suppressed.get() {
            return false;
        }
        (self.callback)(arg);
        self.suppressed.set(true);
        let gate = Rc::clone(&self.suppressed);
        self.scheduler
            .schedule(self.cooldown_ms, Box::new(move || gate.set(false)));
        true
    }
}

/// Closure form of [`Throttle`] with the wrapped callback's signature.
pub fn throttle<A, F>(
    callback: F,
    cooldown_ms: u32,
    scheduler: Rc<dyn Scheduler>,
) -> Result<impl FnMut(A), ConfigError>
where
    F: FnMut(A),
{
    let mut gate = Throttle::new(callback, cooldown_ms, scheduler)?;
    Ok(move |arg: A| {
        gate.call(arg);
    })
}
