// SPDX-License-Identifier: MPL-2.0
//! User-adjustable carousel settings.

use super::transition::TransitionKind;
use crate::config::{DEFAULT_ROTATION_SECS, MAX_ROTATION_SECS, MIN_ROTATION_SECS};
use std::time::Duration;

/// Slideshow interval in whole seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–10 seconds).
///
/// # Example
///
/// ```
/// use iced_carousel::domain::RotationSpeed;
///
/// let speed = RotationSpeed::new(4);
/// assert_eq!(speed.value(), 4);
///
/// // Values outside range are clamped
/// let too_slow = RotationSpeed::new(60);
/// assert_eq!(too_slow.value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSpeed(u32);

impl RotationSpeed {
    /// Creates a new rotation speed, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_ROTATION_SECS, MAX_ROTATION_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for RotationSpeed {
    fn default() -> Self {
        Self(DEFAULT_ROTATION_SECS)
    }
}

/// Settings persisted through the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselSettings {
    pub rotation_speed: RotationSpeed,
    pub transition: TransitionKind,
}
