//! Cancellable trailing-edge debounce.

use std::time::{Duration, Instant};

/// Collapses bursts of events into one trailing fire per quiet period.
///
/// `poke` arms (or re-arms) the deadline; `fire` reports true at most once
/// per armed window, after the quiet period has elapsed. Single-threaded:
/// the owner decides when "now" is, which keeps tests deterministic.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm or re-arm the deadline from `now`.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the quiet period has passed; disarms on fire.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
