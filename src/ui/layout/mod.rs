// SPDX-License-Identifier: MPL-2.0
//! Adaptive layout between windowed and fullscreen presentation.
//!
//! The engine owns [`LayoutState`] and talks to the real window through
//! [`WindowHost`]. It decides window and content sizes; the host applies
//! them. Leaving fullscreen starts a [`SettleSequence`] whose attempts are
//! executed by [`AdaptiveLayoutEngine::poll`].

pub mod settle;
pub mod sizing;

pub use settle::{SettleSequence, TimerHandle};
pub use sizing::{centered_origin, display_size, windowed_size, Chrome};

use iced::{Point, Rectangle, Size};
use std::time::Instant;

/// The window the carousel lives in.
pub trait WindowHost {
    fn is_fullscreen(&self) -> bool;

    fn is_maximized(&self) -> bool;

    /// Usable screen area, excluding OS chrome such as menu bars and docks.
    fn visual_bounds(&self) -> Rectangle;

    fn set_fullscreen(&mut self, fullscreen: bool);

    fn set_maximized(&mut self, maximized: bool);

    fn resize(&mut self, size: Size);

    fn move_to(&mut self, position: Point);

    /// Moves the window to the center of [`visual_bounds`](Self::visual_bounds).
    fn center_on_screen(&mut self, window: Size) {
        let origin = centered_origin(window, self.visual_bounds());
        self.move_to(origin);
    }
}

/// Presentation state.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    pub fullscreen: bool,
    /// Whether the window was maximized when fullscreen was entered.
    pub was_maximized: bool,
    pub window_size: Size,
    pub screen_bounds: Rectangle,
    /// Displayed image size for the current window and mode.
    pub content_size: Option<Size>,
    pub settle: SettleSequence,
}

#[derive(Debug, Clone, Default)]
pub struct AdaptiveLayoutEngine {
    state: LayoutState,
    chrome: Chrome,
}

impl AdaptiveLayoutEngine {
    #[must_use]
    pub fn new(chrome: Chrome) -> Self {
        Self {
            state: LayoutState::default(),
            chrome,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.state.fullscreen
    }

    #[must_use]
    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    /// Replaces the windowed chrome and lays the window out again.
    pub fn set_chrome(&mut self, chrome: Chrome, image: Option<Size>, host: &mut dyn WindowHost) {
        self.chrome = chrome;
        if !self.state.fullscreen {
            self.apply_for_image(image, host);
        }
    }

    /// Whether settle attempts are still scheduled.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.state.settle.is_pending()
    }

    /// Switches the window to fullscreen.
    pub fn enter_fullscreen(&mut self, image: Option<Size>, host: &mut dyn WindowHost) {
        if self.state.fullscreen {
            return;
        }
        host.set_fullscreen(true);
        if !host.is_fullscreen() {
            tracing::debug!("fullscreen request not applied by the window");
            return;
        }
        self.entered_fullscreen(image, host);
    }

    /// Switches back to a window and schedules the settle attempts.
    pub fn exit_fullscreen(&mut self, image: Option<Size>, host: &mut dyn WindowHost, now: Instant) {
        if !self.state.fullscreen {
            return;
        }
        host.set_fullscreen(false);
        if host.is_fullscreen() {
            tracing::debug!("windowed request not applied by the window");
            return;
        }
        self.exited_fullscreen(image, host, now);
    }

    pub fn toggle_fullscreen(
        &mut self,
        image: Option<Size>,
        host: &mut dyn WindowHost,
        now: Instant,
    ) {
        if self.state.fullscreen {
            self.exit_fullscreen(image, host, now);
        } else {
            self.enter_fullscreen(image, host);
        }
    }

    /// Reconciles a fullscreen change reported by the window system.
    pub fn on_fullscreen_changed(
        &mut self,
        fullscreen: bool,
        image: Option<Size>,
        host: &mut dyn WindowHost,
        now: Instant,
    ) {
        if fullscreen == self.state.fullscreen {
            return;
        }
        if fullscreen {
            self.entered_fullscreen(image, host);
        } else {
            self.exited_fullscreen(image, host, now);
        }
    }

    fn entered_fullscreen(&mut self, image: Option<Size>, host: &mut dyn WindowHost) {
        self.state.was_maximized = host.is_maximized();
        self.state.settle.cancel_all();
        self.state.fullscreen = true;
        self.state.screen_bounds = host.visual_bounds();
        if let Some(image) = image {
            self.state.content_size = Some(display_size(
                image,
                self.state.screen_bounds.size(),
                Chrome::NONE,
            ));
        }
        tracing::info!(was_maximized = self.state.was_maximized, "entered fullscreen");
    }

    fn exited_fullscreen(&mut self, image: Option<Size>, host: &mut dyn WindowHost, now: Instant) {
        self.state.fullscreen = false;
        self.state.settle.start(now);
        tracing::info!(
            restore_maximized = self.state.was_maximized,
            "left fullscreen"
        );
        self.poll(now, image, host);
    }

    /// Runs the settle attempts due at `now`. Returns how many ran.
    pub fn poll(&mut self, now: Instant, image: Option<Size>, host: &mut dyn WindowHost) -> usize {
        let due = self.state.settle.take_due(now);
        for _ in 0..due {
            self.settle_attempt(image, host);
        }
        due
    }

    fn settle_attempt(&mut self, image: Option<Size>, host: &mut dyn WindowHost) {
        if host.is_fullscreen() {
            tracing::debug!("settle attempt skipped: host still fullscreen");
            return;
        }
        if self.state.was_maximized {
            host.set_maximized(true);
            tracing::debug!("settle attempt: restored maximized window");
            return;
        }
        if let Some(image) = image {
            self.apply_windowed(image, host);
            tracing::debug!(size = ?self.state.window_size, "settle attempt: windowed size");
        }
    }

    /// Recomputes the displayed size after the user resized the window.
    pub fn on_window_resize(&mut self, window: Size, image: Option<Size>) -> Option<Size> {
        self.state.window_size = window;
        let image = image?;
        let chrome = if self.state.fullscreen {
            Chrome::NONE
        } else {
            self.chrome
        };
        let content = display_size(image, window, chrome);
        self.state.content_size = Some(content);
        Some(content)
    }

    /// Lays the window out for a newly displayed image.
    ///
    /// Fullscreen keeps the screen bounds, a maximized window keeps its
    /// size, and a normal window is resized to fit the image and centered.
    /// Without an image this does nothing.
    pub fn apply_for_image(&mut self, image: Option<Size>, host: &mut dyn WindowHost) {
        let Some(image) = image else {
            return;
        };
        if self.state.fullscreen {
            self.state.content_size = Some(display_size(
                image,
                self.state.screen_bounds.size(),
                Chrome::NONE,
            ));
        } else if host.is_maximized() {
            self.state.content_size =
                Some(display_size(image, self.state.window_size, self.chrome));
        } else {
            self.apply_windowed(image, host);
        }
    }

    fn apply_windowed(&mut self, image: Size, host: &mut dyn WindowHost) {
        let screen = host.visual_bounds();
        let window = windowed_size(image, screen.size(), self.chrome);
        self.state.screen_bounds = screen;
        self.state.window_size = window;
        self.state.content_size = Some(display_size(image, window, self.chrome));
        host.resize(window);
        host.center_on_screen(window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
    use crate::test_utils::{assert_abs_diff_eq, PIXEL_EPSILON};
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct FakeHost {
        fullscreen: bool,
        maximized: bool,
        size: Size,
        position: Point,
        resizes: usize,
        maximize_calls: usize,
    }

    impl WindowHost for FakeHost {
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
        fn is_maximized(&self) -> bool {
            self.maximized
        }
        fn visual_bounds(&self) -> Rectangle {
            Rectangle::new(Point::new(0.0, 0.0), Size::new(1920.0, 1080.0))
        }
        fn set_fullscreen(&mut self, fullscreen: bool) {
            self.fullscreen = fullscreen;
        }
        fn set_maximized(&mut self, maximized: bool) {
            self.maximized = maximized;
            self.maximize_calls += 1;
        }
        fn resize(&mut self, size: Size) {
            self.size = size;
            self.resizes += 1;
        }
        fn move_to(&mut self, position: Point) {
            self.position = position;
        }
    }

    const IMAGE: Size = Size::new(4000.0, 2000.0);

    fn assert_size(actual: Option<Size>, expected: Size) {
        let actual = actual.expect("size");
        assert_abs_diff_eq!(actual.width, expected.width, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(actual.height, expected.height, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn exit_restores_windowed_fit() {
        let mut host = FakeHost::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::NONE);
        let now = Instant::now();

        engine.enter_fullscreen(Some(IMAGE), &mut host);
        assert!(host.fullscreen);
        assert_size(engine.state().content_size, Size::new(1920.0, 960.0));

        engine.exit_fullscreen(Some(IMAGE), &mut host, now);

        assert!(!host.fullscreen);
        assert_size(Some(host.size), Size::new(1728.0, 864.0));
        assert_abs_diff_eq!(host.position.x, 96.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(host.position.y, 108.0, epsilon = PIXEL_EPSILON);
        assert!(engine.is_settling());
    }

    #[test]
    fn exit_restores_maximized_state() {
        let mut host = FakeHost {
            maximized: true,
            ..FakeHost::default()
        };
        let mut engine = AdaptiveLayoutEngine::new(Chrome::shell());
        let now = Instant::now();

        engine.enter_fullscreen(Some(IMAGE), &mut host);
        host.maximized = false;
        engine.exit_fullscreen(Some(IMAGE), &mut host, now);

        assert!(host.maximized);
        assert_eq!(host.resizes, 0);
    }

    #[test]
    fn settle_attempts_run_at_each_offset() {
        let mut host = FakeHost::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::NONE);
        let now = Instant::now();
        engine.enter_fullscreen(Some(IMAGE), &mut host);
        engine.exit_fullscreen(Some(IMAGE), &mut host, now);
        assert_eq!(host.resizes, 1);

        for offset in [100, 250, 500] {
            assert_eq!(
                engine.poll(now + Duration::from_millis(offset), Some(IMAGE), &mut host),
                1
            );
        }
        assert_eq!(host.resizes, 4);
        assert!(!engine.is_settling());
    }

    #[test]
    fn reentering_fullscreen_cancels_settle() {
        let mut host = FakeHost::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::NONE);
        let now = Instant::now();
        engine.enter_fullscreen(Some(IMAGE), &mut host);
        engine.exit_fullscreen(Some(IMAGE), &mut host, now);

        engine.enter_fullscreen(Some(IMAGE), &mut host);

        assert!(!engine.is_settling());
        assert_eq!(
            engine.poll(now + Duration::from_secs(1), Some(IMAGE), &mut host),
            0
        );
        assert_eq!(host.resizes, 1);
    }

    #[test]
    fn refused_fullscreen_request_leaves_layout_windowed() {
        #[derive(Default)]
        struct Unready(FakeHost);

        impl WindowHost for Unready {
            fn is_fullscreen(&self) -> bool {
                self.0.fullscreen
            }
            fn is_maximized(&self) -> bool {
                self.0.maximized
            }
            fn visual_bounds(&self) -> Rectangle {
                self.0.visual_bounds()
            }
            fn set_fullscreen(&mut self, _fullscreen: bool) {}
            fn set_maximized(&mut self, maximized: bool) {
                self.0.set_maximized(maximized);
            }
            fn resize(&mut self, size: Size) {
                self.0.resize(size);
            }
            fn move_to(&mut self, position: Point) {
                self.0.move_to(position);
            }
        }

        let mut host = Unready::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::shell());

        engine.toggle_fullscreen(Some(IMAGE), &mut host, Instant::now());

        assert!(!engine.is_fullscreen());
        assert_eq!(engine.chrome(), Chrome::shell());
    }

    #[test]
    fn attempt_skipped_while_host_reports_fullscreen() {
        let mut host = FakeHost::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::NONE);
        let now = Instant::now();
        engine.enter_fullscreen(Some(IMAGE), &mut host);

        // The window system has not left fullscreen yet.
        engine.on_fullscreen_changed(false, Some(IMAGE), &mut host, now);
        assert_eq!(host.resizes, 0);

        host.fullscreen = false;
        engine.poll(now + Duration::from_millis(100), Some(IMAGE), &mut host);
        assert_eq!(host.resizes, 1);
    }

    #[test]
    fn apply_for_image_floors_small_images() {
        let mut host = FakeHost::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::NONE);

        engine.apply_for_image(Some(Size::new(10.0, 10.0)), &mut host);

        assert!(host.size.width >= MIN_WINDOW_WIDTH);
        assert!(host.size.height >= MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn apply_for_image_leaves_maximized_window_alone() {
        let mut host = FakeHost {
            maximized: true,
            ..FakeHost::default()
        };
        let mut engine = AdaptiveLayoutEngine::new(Chrome::NONE);
        engine.on_window_resize(Size::new(1900.0, 1000.0), None);

        engine.apply_for_image(Some(IMAGE), &mut host);

        assert_eq!(host.resizes, 0);
        assert_size(engine.state().content_size, Size::new(1900.0, 950.0));
    }

    #[test]
    fn no_image_is_a_no_op() {
        let mut host = FakeHost::default();
        let mut engine = AdaptiveLayoutEngine::new(Chrome::shell());

        engine.apply_for_image(None, &mut host);
        assert_eq!(engine.on_window_resize(Size::new(900.0, 700.0), None), None);

        assert_eq!(host.resizes, 0);
        assert!(engine.state().content_size.is_none());
    }

    #[test]
    fn manual_resize_recomputes_display_size() {
        let mut engine = AdaptiveLayoutEngine::new(Chrome {
            horizontal: 0.0,
            vertical: 100.0,
        });
        let content =
            engine.on_window_resize(Size::new(800.0, 600.0), Some(Size::new(1600.0, 900.0)));
        assert_size(content, Size::new(800.0, 450.0));
    }
}
