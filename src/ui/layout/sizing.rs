// SPDX-License-Identifier: MPL-2.0
//! Pure sizing rules.

use crate::config::{
    LAYOUT_PADDING, LAYOUT_SPACING, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, STATUS_BAR_HEIGHT,
    THUMBNAIL_PANEL_HEIGHT, TOOLBAR_HEIGHT, WINDOWED_FIT_RATIO,
};
use iced::{Point, Rectangle, Size};

/// Space taken by UI around the image area, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chrome {
    /// Total horizontal space (both sides).
    pub horizontal: f32,
    /// Total vertical space (toolbar, status bar, spacing, padding).
    pub vertical: f32,
}

impl Chrome {
    /// No chrome at all, as in fullscreen.
    pub const NONE: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Toolbar, status bar and padding of the windowed shell.
    #[must_use]
    pub fn shell() -> Self {
        Self {
            horizontal: 2.0 * LAYOUT_PADDING,
            vertical: TOOLBAR_HEIGHT + STATUS_BAR_HEIGHT + LAYOUT_SPACING + 2.0 * LAYOUT_PADDING,
        }
    }

    /// [`shell`](Self::shell) plus the thumbnail strip under the viewer.
    #[must_use]
    pub fn shell_with_thumbnails() -> Self {
        let shell = Self::shell();
        Self {
            vertical: shell.vertical + THUMBNAIL_PANEL_HEIGHT + LAYOUT_SPACING,
            ..shell
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::shell()
    }
}

/// Largest `image`-shaped size fitting in `available`.
fn fit(image: Size, available: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Size::ZERO;
    }
    let scale = (available.width / image.width).min(available.height / image.height);
    let scale = scale.max(0.0);
    Size::new(image.width * scale, image.height * scale)
}

/// Window size for showing `image` windowed on a screen with `screen` visual bounds.
///
/// The image is scaled to fit 90% of the screen, keeping its aspect ratio,
/// then the chrome is added and the result floored at 800×600.
#[must_use]
pub fn windowed_size(image: Size, screen: Size, chrome: Chrome) -> Size {
    let max = Size::new(
        screen.width * WINDOWED_FIT_RATIO,
        screen.height * WINDOWED_FIT_RATIO,
    );
    let content = fit(image, max);
    Size::new(
        (content.width.min(max.width) + chrome.horizontal).max(MIN_WINDOW_WIDTH),
        (content.height.min(max.height) + chrome.vertical).max(MIN_WINDOW_HEIGHT),
    )
}

/// Displayed image size inside a window of `window` size.
#[must_use]
pub fn display_size(image: Size, window: Size, chrome: Chrome) -> Size {
    let available = Size::new(
        (window.width - chrome.horizontal).max(0.0),
        (window.height - chrome.vertical).max(0.0),
    );
    fit(image, available)
}

/// Top-left position that centers a `window` on `screen`.
#[must_use]
pub fn centered_origin(window: Size, screen: Rectangle) -> Point {
    Point::new(
        screen.x + (screen.width - window.width) / 2.0,
        screen.y + (screen.height - window.height) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PIXEL_EPSILON};

    const SCREEN: Size = Size::new(1920.0, 1080.0);

    #[test]
    fn large_image_fits_ninety_percent_of_screen() {
        let size = windowed_size(Size::new(4000.0, 2000.0), SCREEN, Chrome::NONE);
        assert_abs_diff_eq!(size.width, 1728.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(size.height, 864.0, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn small_image_is_floored() {
        let size = windowed_size(Size::new(100.0, 100.0), Size::new(500.0, 400.0), Chrome::NONE);
        assert_abs_diff_eq!(size.width, MIN_WINDOW_WIDTH, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(size.height, MIN_WINDOW_HEIGHT, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn chrome_is_added_to_content() {
        let chrome = Chrome {
            horizontal: 40.0,
            vertical: 100.0,
        };
        let size = windowed_size(Size::new(1000.0, 1000.0), SCREEN, chrome);
        assert_abs_diff_eq!(size.width, 972.0 + 40.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(size.height, 972.0 + 100.0, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn display_size_preserves_aspect_ratio() {
        let chrome = Chrome {
            horizontal: 0.0,
            vertical: 100.0,
        };
        let size = display_size(Size::new(1600.0, 900.0), Size::new(800.0, 600.0), chrome);
        assert_abs_diff_eq!(size.width, 800.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(size.height, 450.0, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn display_size_of_tiny_window_is_zero() {
        let size = display_size(Size::new(10.0, 10.0), Size::new(20.0, 20.0), Chrome::shell());
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn centered_origin_respects_screen_offset() {
        let screen = Rectangle::new(Point::new(0.0, 25.0), Size::new(1920.0, 1055.0));
        let origin = centered_origin(Size::new(800.0, 600.0), screen);
        assert_abs_diff_eq!(origin.x, 560.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(origin.y, 252.5, epsilon = PIXEL_EPSILON);
    }
}
