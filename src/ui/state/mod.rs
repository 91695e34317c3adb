// SPDX-License-Identifier: MPL-2.0
//! Per-image interaction state.
//!
//! These modules hold the state machines the orchestrator drives for the
//! currently displayed image, kept apart from the shell's `App` struct.

pub mod drag;
pub mod rotation_timer;
pub mod viewport;
pub mod zoom;

pub use drag::DragState;
pub use rotation_timer::RotationTimer;
pub use viewport::ViewportState;
pub use zoom::{ZoomPanEngine, ZoomScale, ZoomState};
