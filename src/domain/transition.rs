// SPDX-License-Identifier: MPL-2.0
//! Transition styles.

use crate::config::TRANSITION_DURATION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Visual style used when the displayed image changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    /// Swap instantly.
    None,
    /// Cross-fade the outgoing and incoming images.
    #[default]
    Fade,
    /// Incoming image enters from the left edge, outgoing leaves to the right.
    SlideLeft,
    /// Incoming image enters from the right edge, outgoing leaves to the left.
    SlideRight,
}

impl TransitionKind {
    /// All kinds, in picker order.
    pub const ALL: [TransitionKind; 4] = [
        TransitionKind::None,
        TransitionKind::Fade,
        TransitionKind::SlideLeft,
        TransitionKind::SlideRight,
    ];

    /// Human-readable name for pickers and logs.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            TransitionKind::None => "None",
            TransitionKind::Fade => "Fade",
            TransitionKind::SlideLeft => "Slide Left",
            TransitionKind::SlideRight => "Slide Right",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A transition style together with its fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub kind: TransitionKind,
    pub duration: Duration,
}

impl TransitionSpec {
    /// A spec with the canonical duration.
    #[must_use]
    pub fn new(kind: TransitionKind) -> Self {
        Self {
            kind,
            duration: TRANSITION_DURATION,
        }
    }

    /// Instant swap.
    #[must_use]
    pub fn none() -> Self {
        Self::new(TransitionKind::None)
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(TransitionKind::default())
    }
}

impl From<TransitionKind> for TransitionSpec {
    fn from(kind: TransitionKind) -> Self {
        Self::new(kind)
    }
}
