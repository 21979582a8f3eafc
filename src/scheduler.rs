//! Rate limiting for scroll-driven recomputation.
//!
//! A time-window throttle with a guaranteed trailing edge: events inside the
//! window are coalesced into one pending call that fires once the window
//! elapses, so the final settled scroll position is always resolved. The
//! clock is passed in explicitly, which keeps the limiter testable without
//! real timing.

use std::time::{Duration, Instant};

/// Time-window rate limiter with leading and trailing edges.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    window_start: Option<Instant>,
    trailing: bool,
}

impl Throttle {
    #[must_use]
    /// Create a throttle enforcing a minimum `interval` between calls.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            trailing: false,
        }
    }

    /// Record an event; `true` when the caller should run now.
    ///
    /// Outside a window the event opens one and fires immediately. Inside a
    /// window it is coalesced into a single pending trailing call.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.window_start {
            Some(start) if now.duration_since(start) < self.interval => {
                self.trailing = true;
                false
            }
            _ => {
                self.window_start = Some(now);
                self.trailing = false;
                true
            }
        }
    }

    /// Fire the trailing edge; `true` at most once per elapsed window.
    ///
    /// Returns `true` exactly when a coalesced event is pending and the
    /// window has elapsed, guaranteeing last-state-wins after a burst.
    pub fn flush(&mut self, now: Instant) -> bool {
        if !self.trailing {
            return false;
        }
        match self.window_start {
            Some(start) if now.duration_since(start) < self.interval => false,
            _ => {
                self.window_start = Some(now);
                self.trailing = false;
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scheduler.rs"]
mod tests;
