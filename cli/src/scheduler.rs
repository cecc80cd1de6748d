//! Tokio-backed scheduler.
//!
//! Tasks are `!Send`, so they run with `spawn_local`: callers must be inside
//! a `LocalSet` on a current-thread runtime.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::time::Duration;

use sitefx::host::Scheduler;

pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(Duration::from_millis(u64::from(delay_ms))).await;
            task();
        });
    }
}
