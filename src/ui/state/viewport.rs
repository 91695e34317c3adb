// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the size of the area the image is drawn in.

use iced::{Point, Size};

/// Manages the viewport size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    /// Current viewport size in logical pixels.
    pub size: Size,
}

impl ViewportState {
    /// Records a new viewport size. Returns whether it changed.
    pub fn resize(&mut self, size: Size) -> bool {
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Center of the viewport in its own coordinates.
    ///
    /// Keyboard zoom uses this as its pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}
