// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for tuning values
//! used across the carousel. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Scale bounds and wheel/keyboard step
//! - **Transition**: Animation duration
//! - **Rotation**: Slideshow interval bounds
//! - **Layout**: Windowed sizing rule and fullscreen settle offsets
//! - **Thumbnails**: Grid cell metrics
//! - **Status**: Transient message lifetime

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Smallest interactive zoom multiplier (the image exactly fits the viewport).
pub const MIN_ZOOM: f32 = 1.0;

/// Largest interactive zoom multiplier.
pub const MAX_ZOOM: f32 = 5.0;

/// Multiplier applied per wheel notch or `+`/`-` key press.
pub const DEFAULT_ZOOM_STEP_FACTOR: f32 = 1.1;

/// Smallest accepted zoom step factor in `settings.toml`.
pub const MIN_ZOOM_STEP_FACTOR: f32 = 1.01;

/// Largest accepted zoom step factor in `settings.toml`.
pub const MAX_ZOOM_STEP_FACTOR: f32 = 2.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of every animated transition.
pub const TRANSITION_DURATION_MS: u64 = 500;

/// [`TRANSITION_DURATION_MS`] as a `Duration`.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(TRANSITION_DURATION_MS);

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default slideshow interval (in seconds).
pub const DEFAULT_ROTATION_SECS: u32 = 3;

/// Minimum slideshow interval (in seconds).
pub const MIN_ROTATION_SECS: u32 = 1;

/// Maximum slideshow interval (in seconds).
pub const MAX_ROTATION_SECS: u32 = 10;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Share of the screen's visual bounds a windowed image may occupy.
pub const WINDOWED_FIT_RATIO: f32 = 0.9;

/// Windowed width floor.
pub const MIN_WINDOW_WIDTH: f32 = 800.0;

/// Windowed height floor.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Offsets after leaving fullscreen at which the windowed layout is re-applied.
pub const SETTLE_OFFSETS_MS: [u64; 4] = [0, 100, 250, 500];

/// Padding around the image area (each side).
pub const LAYOUT_PADDING: f32 = 20.0;

/// Vertical gap between the toolbar and the image area.
pub const LAYOUT_SPACING: f32 = 10.0;

/// Height reserved for the toolbar.
pub const TOOLBAR_HEIGHT: f32 = 40.0;

/// Height reserved for the status bar.
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Edge length of a thumbnail cell.
pub const THUMBNAIL_SIZE: f32 = 120.0;

/// Gap between thumbnail cells (and around the grid).
pub const THUMBNAIL_SPACING: f32 = 10.0;

/// Columns shown per row when the grid width is unknown.
pub const DEFAULT_THUMBNAIL_COLUMNS: usize = 5;

/// Height of the thumbnail strip under the viewer: one row plus padding.
pub const THUMBNAIL_PANEL_HEIGHT: f32 = THUMBNAIL_SIZE + 2.0 * THUMBNAIL_SPACING;

// ==========================================================================
// Status Defaults
// ==========================================================================

/// Delay after which a status error message is cleared.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MAX_ZOOM > MIN_ZOOM);
    assert!(DEFAULT_ZOOM_STEP_FACTOR > 1.0);
    assert!(DEFAULT_ZOOM_STEP_FACTOR >= MIN_ZOOM_STEP_FACTOR);
    assert!(DEFAULT_ZOOM_STEP_FACTOR <= MAX_ZOOM_STEP_FACTOR);

    // Transition validation
    assert!(TRANSITION_DURATION_MS > 0);

    // Rotation validation
    assert!(MIN_ROTATION_SECS > 0);
    assert!(MAX_ROTATION_SECS >= MIN_ROTATION_SECS);
    assert!(DEFAULT_ROTATION_SECS >= MIN_ROTATION_SECS);
    assert!(DEFAULT_ROTATION_SECS <= MAX_ROTATION_SECS);

    // Layout validation
    assert!(WINDOWED_FIT_RATIO > 0.0 && WINDOWED_FIT_RATIO <= 1.0);
    assert!(MIN_WINDOW_WIDTH > 0.0 && MIN_WINDOW_HEIGHT > 0.0);
    assert!(SETTLE_OFFSETS_MS[0] == 0);
    assert!(SETTLE_OFFSETS_MS[1] > SETTLE_OFFSETS_MS[0]);
    assert!(SETTLE_OFFSETS_MS[2] > SETTLE_OFFSETS_MS[1]);
    assert!(SETTLE_OFFSETS_MS[3] > SETTLE_OFFSETS_MS[2]);

    // Thumbnail validation
    assert!(THUMBNAIL_SIZE > 0.0);
    assert!(DEFAULT_THUMBNAIL_COLUMNS > 0);
};
