// SPDX-License-Identifier: MPL-2.0
//! Slideshow rotation timer.

use std::time::{Duration, Instant};

/// A repeating deadline for the next automatic advance.
///
/// The timer holds no thread or task of its own: the shell polls it from
/// its tick subscription. Dropping the value stops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimer {
    interval: Duration,
    next_due: Instant,
}

impl RotationTimer {
    /// Starts a timer whose first deadline is one `interval` after `now`.
    #[must_use]
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns `true` once per elapsed deadline, re-arming from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_interval_and_rearms() {
        let start = Instant::now();
        let mut timer = RotationTimer::start(Duration::from_secs(3), start);

        assert!(!timer.poll(start + Duration::from_secs(2)));
        assert!(timer.poll(start + Duration::from_secs(3)));
        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert_eq!(timer.next_due(), start + Duration::from_secs(6));
    }

    #[test]
    fn late_poll_fires_once() {
        let start = Instant::now();
        let mut timer = RotationTimer::start(Duration::from_secs(1), start);
        let late = start + Duration::from_secs(10);

        assert!(timer.poll(late));
        assert!(!timer.poll(late));
    }
}
