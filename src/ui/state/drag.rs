// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a grab-and-drag gesture over the viewer and turns pointer motion
//! into incremental pan deltas.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Last pointer position seen while dragging; `None` when idle.
    last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag at `position`.
    pub fn start(&mut self, position: Point) {
        self.last_position = Some(position);
    }

    /// Stops the drag.
    pub fn stop(&mut self) {
        self.last_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    /// Records a pointer move and returns the delta since the previous one.
    ///
    /// Returns `None` when no drag is active.
    pub fn move_to(&mut self, position: Point) -> Option<Vector> {
        let last = self.last_position.replace(position)?;
        Some(position - last)
    }
}
