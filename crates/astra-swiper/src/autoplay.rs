//! Single-shot autoplay timer
//!
//! The timer never runs on its own: the host's frame loop polls it with the
//! current [`Instant`], which keeps it deterministic and lets tests drive it
//! with synthetic clocks.

use std::time::{Duration, Instant};

use crate::index::Direction;

/// Longest accepted autoplay timeout, in seconds (one day)
pub const MAX_TIMEOUT_SECS: f32 = 86_400.0;

/// Autoplay timer with at most one pending deadline
///
/// `timeout` is in seconds. `0` disables autoplay, a negative value makes the
/// timer navigate backwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoplayTimer {
    timeout: f32,
    deadline: Option<Instant>,
    suspended: bool,
}

impl AutoplayTimer {
    pub fn new(timeout: f32) -> Self {
        let timeout = if timeout.is_finite() { timeout } else { 0.0 };
        Self {
            timeout,
            deadline: None,
            suspended: false,
        }
    }

    pub fn timeout(&self) -> f32 {
        self.timeout
    }

    /// Whether the timer ever fires
    pub fn is_enabled(&self) -> bool {
        self.timeout != 0.0
    }

    /// Direction of automatic navigation
    pub fn direction(&self) -> Direction {
        if self.timeout < 0.0 {
            Direction::Prev
        } else {
            Direction::Next
        }
    }

    /// Pending deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Replace any pending deadline with a fresh one `|timeout|` from `now`
    ///
    /// Does nothing beyond clearing while autoplay is disabled or suspended.
    /// A deadline that cannot be represented leaves the timer idle.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = None;
        if !self.is_enabled() || self.suspended {
            return;
        }
        let deadline = Duration::try_from_secs_f32(self.timeout.abs())
            .ok()
            .and_then(|delay| now.checked_add(delay));
        if deadline.is_none() {
            log::warn!("autoplay: timeout {}s out of range, not scheduling", self.timeout);
        }
        self.deadline = deadline;
    }

    /// Drop the pending deadline. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancel and hold off scheduling (for the duration of a gesture)
    pub fn suspend(&mut self) {
        self.cancel();
        self.suspended = true;
    }

    /// Lift a suspension without scheduling
    pub fn unsuspend(&mut self) {
        self.suspended = false;
    }

    /// Lift a suspension and schedule again
    pub fn resume(&mut self, now: Instant) {
        self.unsuspend();
        self.schedule(now);
    }

    /// Fire if the deadline has passed
    ///
    /// The timer is single-shot: once fired it stays idle until rescheduled.
    pub fn poll(&mut self, now: Instant) -> Option<Direction> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                log::debug!("autoplay: fired ({:?})", self.direction());
                Some(self.direction())
            }
            _ => None,
        }
    }
}
