use std::sync::atomic::AtomicBool;

use portable_atomic::{AtomicU64, AtomicU8, Ordering};

/// The state shared by the three tasks of a run.
///
/// Every field has exactly one writer, so plain atomic loads and
/// stores are enough; no locks are involved anywhere.
///
/// - `running` is written once, by the timer when the countdown ends.
/// - `percentage` is written only by the timer.
/// - `counter` is written only by the counter task.
#[derive(Debug)]
pub struct SharedState {
    running: AtomicBool,
    percentage: AtomicU8,
    counter: AtomicU64,
}

impl Default for SharedState {
    fn default() -> SharedState {
        SharedState {
            running: AtomicBool::new(true),
            percentage: AtomicU8::new(0),
            counter: AtomicU64::new(0),
        }
    }
}

impl SharedState {
    pub fn new() -> SharedState {
        SharedState::default()
    }

    /// Whether the run is still in progress.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ends the run. Called exactly once, by the timer task; the flag
    /// is never set back to true.
    pub fn finish(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// The current elapsed-time percentage, 0 to 100.
    pub fn percentage(&self) -> u8 {
        self.percentage.load(Ordering::Relaxed)
    }

    pub(crate) fn set_percentage(&self, pct: u8) {
        debug_assert!(pct <= 100);
        self.percentage.store(pct, Ordering::Relaxed);
    }

    pub(crate) fn inc_counter(&self) {
        self.counter.fetch_add(1, Ordering::Relaxed);
    }

    /// The tally so far. Race-free only after the counter task has
    /// been joined.
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
