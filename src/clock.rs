//! Virtual-time scheduler.
//!
//! `ManualClock` queues tasks by `(due time, insertion order)` and only runs
//! them when told to advance. Tasks may schedule further tasks while running;
//! the queue borrow is released before each task is invoked.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::host::Scheduler;

type Task = Box<dyn FnOnce()>;

#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), Task>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Due time of the earliest queued task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.inner
            .borrow()
            .queue
            .keys()
            .next()
            .map(|&(due, _)| due)
    }

    /// Jump to the earliest queued task and run it. Returns its due time.
    pub fn run_next(&self) -> Option<u64> {
        let (due, task) = {
            let mut inner = self.inner.borrow_mut();
            let ((due, _), task) = inner.queue.pop_first()?;
            inner.now_ms = inner.now_ms.max(due);
            (due, task)
        };
        task();
        Some(due)
    }

    /// Run every task due at or before `target_ms`, in order, then settle the
    /// clock at `target_ms`. Tasks scheduled along the way run too if they
    /// fall inside the window.
    pub fn advance_to(&self, target_ms: u64) {
        while self.next_due().is_some_and(|due| due <= target_ms) {
            self.run_next();
        }
        let mut inner = self.inner.borrow_mut();
        inner.now_ms = inner.now_ms.max(target_ms);
    }

    /// Advance by `delta_ms` from the current time.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms().saturating_add(delta_ms);
        self.advance_to(target);
    }

    /// Drop every queued task without running it. Returns how many were
    /// discarded.
    ///
    /// A self-rescheduling task holds the clock that queues it, so the pair
    /// stays alive until the queue is emptied.
    pub fn clear(&self) -> usize {
        let dropped = std::mem::take(&mut self.inner.borrow_mut().queue);
        dropped.len()
    }
}

impl Scheduler for ManualClock {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now_ms.saturating_add(u64::from(delay_ms));
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.queue.insert((due, seq), task);
    }
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualClock")
            .field("now_ms", &inner.now_ms)
            .field("pending", &inner.queue.len())
            .finish()
    }
}
