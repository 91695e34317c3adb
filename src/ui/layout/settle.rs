// SPDX-License-Identifier: MPL-2.0
//! Settle sequence after leaving fullscreen.
//!
//! Window managers restore from fullscreen asynchronously and may report
//! stale bounds for a while. The layout engine therefore re-applies the
//! windowed layout at fixed offsets after the exit. Each sequence owns its
//! pending handles; starting a new one or cancelling drops them all.

use crate::config::SETTLE_OFFSETS_MS;
use std::time::{Duration, Instant};

/// One pending re-layout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
    due: Instant,
}

impl TimerHandle {
    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettleSequence {
    generation: u64,
    pending: Vec<TimerHandle>,
}

impl SettleSequence {
    /// Cancels any pending attempts and schedules a fresh set from `now`.
    pub fn start(&mut self, now: Instant) {
        self.cancel_all();
        self.generation += 1;
        let generation = self.generation;
        self.pending = SETTLE_OFFSETS_MS
            .iter()
            .map(|offset| TimerHandle {
                generation,
                due: now + Duration::from_millis(*offset),
            })
            .collect();
    }

    /// Drops every pending attempt.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(
                generation = self.generation,
                dropped = self.pending.len(),
                "settle sequence cancelled"
            );
        }
        self.pending.clear();
    }

    /// Removes and returns the number of attempts due at `now`.
    pub fn take_due(&mut self, now: Instant) -> usize {
        let generation = self.generation;
        let before = self.pending.len();
        self.pending
            .retain(|handle| handle.generation == generation && handle.due > now);
        before - self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(TimerHandle::due).min()
    }

    #[must_use]
    pub fn pending(&self) -> &[TimerHandle] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_fire_at_fixed_offsets() {
        let start = Instant::now();
        let mut settle = SettleSequence::default();
        settle.start(start);

        assert_eq!(settle.take_due(start), 1);
        assert_eq!(settle.take_due(start + Duration::from_millis(99)), 0);
        assert_eq!(settle.take_due(start + Duration::from_millis(100)), 1);
        assert_eq!(settle.take_due(start + Duration::from_millis(600)), 2);
        assert!(!settle.is_pending());
    }

    #[test]
    fn restart_invalidates_previous_handles() {
        let start = Instant::now();
        let mut settle = SettleSequence::default();
        settle.start(start);
        let stale = settle.pending()[3];

        settle.start(start + Duration::from_millis(300));

        assert_eq!(settle.pending().len(), SETTLE_OFFSETS_MS.len());
        assert!(settle
            .pending()
            .iter()
            .all(|handle| handle.generation() == stale.generation() + 1));
        assert_eq!(settle.take_due(start + Duration::from_millis(300)), 1);
    }

    #[test]
    fn cancel_all_clears_everything() {
        let start = Instant::now();
        let mut settle = SettleSequence::default();
        settle.start(start);
        settle.cancel_all();

        assert!(settle.next_due().is_none());
        assert_eq!(settle.take_due(start + Duration::from_secs(1)), 0);
    }
}
