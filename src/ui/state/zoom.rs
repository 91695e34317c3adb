// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state for the displayed image.
//!
//! The view transform maps viewport-local points of the fitted image to
//! screen points: `screen = translation + scale * local`. Zooming about a
//! pivot keeps the content under the pivot fixed; panning moves the
//! translation and is only allowed above the minimum scale. Reaching the
//! minimum scale snaps the translation back to zero.

pub use crate::config::{DEFAULT_ZOOM_STEP_FACTOR, MAX_ZOOM, MIN_ZOOM};

use super::viewport::ViewportState;
use iced::{Point, Rectangle, Size, Vector};

/// Interactive zoom multiplier, guaranteed to be within `[MIN_ZOOM, MAX_ZOOM]`.
///
/// # Example
///
/// ```
/// use iced_carousel::ui::state::ZoomScale;
///
/// assert_eq!(ZoomScale::new(7.5).value(), 5.0);
/// assert!(ZoomScale::new(0.2).is_min());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(scale.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(MIN_ZOOM)
    }
}

/// Scale and translation of the view transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    pub scale: ZoomScale,
    pub translation: Vector,
}

impl ZoomState {
    /// Whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_min() && self.translation == Vector::ZERO
    }
}

/// Owns the view transform of the currently displayed image.
#[derive(Debug, Clone)]
pub struct ZoomPanEngine {
    state: ZoomState,
    viewport: ViewportState,
    /// Natural pixel size of the current image.
    content: Option<Size>,
    step: f32,
}

impl Default for ZoomPanEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP_FACTOR)
    }
}

impl ZoomPanEngine {
    /// Creates an engine with no image and the given keyboard/wheel step.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            state: ZoomState::default(),
            viewport: ViewportState::default(),
            content: None,
            step,
        }
    }

    /// Multiplies the scale by `factor` while keeping `pivot` fixed.
    ///
    /// `pivot` is in viewport-local coordinates. The resulting scale is
    /// clamped; when clamping leaves it unchanged the call does nothing.
    /// Returns whether the transform changed.
    pub fn zoom(&mut self, factor: f32, pivot: Point) -> bool {
        if self.content.is_none() || !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let old = self.state.scale.value();
        let new = ZoomScale::new(old * factor);
        if new.value() == old {
            return false;
        }

        self.state.scale = new;
        if new.is_min() {
            // The minimum scale is always centered.
            self.state.translation = Vector::ZERO;
            return true;
        }
        let relative = (pivot - Point::ORIGIN - self.state.translation) * (1.0 / old);
        self.state.translation = pivot - Point::ORIGIN - relative * new.value();
        true
    }

    /// Zooms in one step about `pivot`.
    pub fn zoom_in(&mut self, pivot: Point) -> bool {
        self.zoom(self.step, pivot)
    }

    /// Zooms out one step about `pivot`.
    pub fn zoom_out(&mut self, pivot: Point) -> bool {
        self.zoom(1.0 / self.step, pivot)
    }

    /// Moves the view by `delta`. Ignored at minimum zoom.
    pub fn pan(&mut self, delta: Vector) -> bool {
        if self.content.is_none() || self.state.scale.is_min() {
            return false;
        }
        self.state.translation = self.state.translation + delta;
        true
    }

    /// Restores the identity transform, which centers the fitted image.
    pub fn reset_zoom(&mut self) {
        self.state = ZoomState::default();
    }

    /// Swaps the content being zoomed. Always resets the transform.
    pub fn set_image(&mut self, content: Option<Size>) {
        self.content = content.filter(|size| size.width > 0.0 && size.height > 0.0);
        self.reset_zoom();
    }

    /// Records the viewport size the fitted image is laid out in.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport.resize(size);
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Fit-to-viewport size of the current image at scale 1.0.
    #[must_use]
    pub fn fit_size(&self) -> Option<Size> {
        let content = self.content?;
        let viewport = self.viewport.size;
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let fit = (viewport.width / content.width).min(viewport.height / content.height);
        Some(Size::new(content.width * fit, content.height * fit))
    }

    /// Viewport-local rectangle of the fitted image, centered, before the
    /// view transform is applied.
    #[must_use]
    pub fn fitted_bounds(&self) -> Option<Rectangle> {
        let fit = self.fit_size()?;
        let origin = Point::new(
            (self.viewport.size.width - fit.width) / 2.0,
            (self.viewport.size.height - fit.height) / 2.0,
        );
        Some(Rectangle::new(origin, fit))
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state.scale.value()
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        self.state.translation
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Whether an image is loaded; zoom and pan are no-ops without one.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}
