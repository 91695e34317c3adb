// SPDX-License-Identifier: MPL-2.0
//! Carousel orchestrator.
//!
//! [`CarouselOrchestrator`] owns every engine and is the only place where
//! they meet. An image change always runs the same sequence:
//!
//! 1. navigation picks the new index
//! 2. the asset at that index gets a new stage view
//! 3. the transition engine hands over from the displayed view
//! 4. zoom and pan reset for the new image
//! 5. the thumbnail highlight moves
//! 6. the status bar is updated
//! 7. the layout engine resizes for the new image
//!
//! Time is passed in by the caller, so the orchestrator never reads a clock.

use crate::application::port::{ImageSource, SettingsStore};
use crate::application::NavigationState;
use crate::config::{DEFAULT_ZOOM_STEP_FACTOR, THUMBNAIL_PANEL_HEIGHT};
use crate::domain::{CarouselSettings, ImageAsset, TransitionSpec};
use crate::error::Result;
use crate::ui::layout::{AdaptiveLayoutEngine, Chrome, WindowHost};
use crate::ui::state::{DragState, RotationTimer, ZoomPanEngine};
use crate::ui::status::{StatusBar, StatusToken};
use crate::ui::thumbnail_grid::{self, ThumbnailGrid};
use crate::ui::transition::{Stage, TickOutcome, TransitionEngine, ViewId};
use iced::{Point, Size, Vector};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct CarouselOrchestrator {
    navigation: NavigationState,
    zoom: ZoomPanEngine,
    drag: DragState,
    transitions: TransitionEngine,
    stage: Stage,
    displayed: Option<ViewId>,
    layout: AdaptiveLayoutEngine,
    grid: ThumbnailGrid<usize>,
    status: StatusBar,
    settings: CarouselSettings,
    rotation: Option<RotationTimer>,
    directory: Option<PathBuf>,
    /// Errors shown since the shell last asked, awaiting a delayed clear.
    pending_status_clears: Vec<StatusToken>,
}

impl Default for CarouselOrchestrator {
    fn default() -> Self {
        Self::new(CarouselSettings::default(), Chrome::shell(), DEFAULT_ZOOM_STEP_FACTOR)
    }
}

impl CarouselOrchestrator {
    #[must_use]
    pub fn new(settings: CarouselSettings, chrome: Chrome, zoom_step: f32) -> Self {
        let mut navigation = NavigationState::new();
        navigation.set_rotation_speed(settings.rotation_speed);
        let mut grid = ThumbnailGrid::new();
        grid.on_select(|index| index);
        grid.set_viewport_height(THUMBNAIL_PANEL_HEIGHT);

        Self {
            navigation,
            zoom: ZoomPanEngine::new(zoom_step),
            drag: DragState::default(),
            transitions: TransitionEngine::new(),
            stage: Stage::new(),
            displayed: None,
            layout: AdaptiveLayoutEngine::new(chrome),
            grid,
            status: StatusBar::new(),
            settings,
            rotation: None,
            directory: None,
            pending_status_clears: Vec::new(),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Shows the next image, wrapping after the last.
    pub fn request_next(&mut self, now: Instant, host: &mut dyn WindowHost) -> Option<usize> {
        self.navigate(now, host, NavigationState::next)
    }

    /// Shows the previous image, wrapping before the first.
    pub fn request_previous(&mut self, now: Instant, host: &mut dyn WindowHost) -> Option<usize> {
        self.navigate(now, host, NavigationState::previous)
    }

    /// Shows the image at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` when `index` is out of range; nothing
    /// changes in that case.
    pub fn select_thumbnail(
        &mut self,
        index: usize,
        now: Instant,
        host: &mut dyn WindowHost,
    ) -> Result<usize> {
        let before = self.navigation.current_index();
        let index = self.navigation.select_index(index)?;
        if before != Some(index) {
            self.show_current(now, host);
        }
        Ok(index)
    }

    /// Routes a thumbnail grid message; a click selects that image.
    pub fn handle_thumbnail(
        &mut self,
        message: thumbnail_grid::Message,
        now: Instant,
        host: &mut dyn WindowHost,
    ) -> Result<Option<usize>> {
        match self.grid.update(message) {
            Some(index) => self.select_thumbnail(index, now, host).map(Some),
            None => Ok(None),
        }
    }

    fn navigate(
        &mut self,
        now: Instant,
        host: &mut dyn WindowHost,
        step: fn(&mut NavigationState) -> Option<usize>,
    ) -> Option<usize> {
        let before = self.navigation.current_index();
        let index = step(&mut self.navigation)?;
        if before != Some(index) {
            self.show_current(now, host);
        }
        Some(index)
    }

    fn show_current(&mut self, now: Instant, host: &mut dyn WindowHost) {
        let Some(index) = self.navigation.current_index() else {
            return;
        };
        let Some(asset) = self.navigation.current().map(Arc::clone) else {
            return;
        };

        let incoming = self.stage.create_view(Arc::clone(&asset));
        self.transitions.request_transition(
            self.displayed,
            incoming,
            TransitionSpec::new(self.settings.transition),
            &mut self.stage,
            now,
            None,
        );
        self.displayed = Some(incoming);
        self.stage.prune();

        self.drag.stop();
        self.zoom.set_image(Some(asset.size()));
        self.grid.update_selection(index);
        self.status.set_image(&asset, index, self.navigation.len());
        self.layout.apply_for_image(Some(asset.size()), host);
        self.sync_viewport();

        tracing::debug!(index, image = %asset, "showing image");
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    /// Replaces the rotation timer. The previous timer is always dropped
    /// first, so at most one is ever alive.
    pub fn set_rotation_timer(&mut self, interval: Option<Duration>, now: Instant) {
        if self.rotation.take().is_some() {
            tracing::debug!("rotation timer stopped");
        }
        if let Some(interval) = interval {
            self.rotation = Some(RotationTimer::start(interval, now));
            tracing::debug!(?interval, "rotation timer started");
        }
    }

    fn sync_rotation(&mut self, now: Instant) {
        let interval = (!self.navigation.is_paused() && self.navigation.len() > 1)
            .then(|| self.navigation.rotation_speed().as_duration());
        self.set_rotation_timer(interval, now);
    }

    /// Pauses or resumes automatic rotation. Returns the new paused state.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        let paused = !self.navigation.is_paused();
        self.navigation.set_paused(paused);
        self.sync_rotation(now);
        tracing::info!(paused, "rotation toggled");
        paused
    }

    /// Applies new settings and restarts the rotation timer when running.
    pub fn apply_settings(&mut self, settings: CarouselSettings, now: Instant) {
        self.settings = settings;
        self.navigation.set_rotation_speed(settings.rotation_speed);
        self.sync_rotation(now);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    pub fn toggle_fullscreen(&mut self, now: Instant, host: &mut dyn WindowHost) {
        self.layout
            .toggle_fullscreen(self.current_size(), host, now);
        self.sync_viewport();
    }

    /// Leaves fullscreen; ignored when windowed.
    pub fn exit_fullscreen(&mut self, now: Instant, host: &mut dyn WindowHost) {
        self.layout
            .exit_fullscreen(self.current_size(), host, now);
        self.sync_viewport();
    }

    /// Reconciles a fullscreen change made by the window system.
    pub fn on_fullscreen_changed(
        &mut self,
        fullscreen: bool,
        now: Instant,
        host: &mut dyn WindowHost,
    ) {
        self.layout
            .on_fullscreen_changed(fullscreen, self.current_size(), host, now);
        self.sync_viewport();
    }

    /// Changes the space the shell reserves around the image.
    pub fn set_chrome(&mut self, chrome: Chrome, host: &mut dyn WindowHost) {
        self.layout.set_chrome(chrome, self.current_size(), host);
        self.sync_viewport();
    }

    /// Recomputes the display size after a window resize.
    pub fn on_window_resize(&mut self, size: Size) {
        self.layout.on_window_resize(size, self.current_size());
        self.sync_viewport();
    }

    /// Size of the area the image is drawn in.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        let state = self.layout.state();
        if state.fullscreen {
            return state.screen_bounds.size();
        }
        let chrome = self.layout.chrome();
        Size::new(
            (state.window_size.width - chrome.horizontal).max(0.0),
            (state.window_size.height - chrome.vertical).max(0.0),
        )
    }

    fn sync_viewport(&mut self) {
        let viewport = self.viewport_size();
        self.zoom.set_viewport_size(viewport);
        self.stage.set_width(viewport.width);
    }

    // =========================================================================
    // Zoom and pan
    // =========================================================================

    /// Zooms by `factor` about `pivot` (viewport-local). No-op without images.
    pub fn zoom_at(&mut self, factor: f32, pivot: Point) -> bool {
        if self.navigation.is_empty() {
            return false;
        }
        self.zoom.zoom(factor, pivot)
    }

    /// One zoom step in (`true`) or out about the viewport center.
    pub fn zoom_step(&mut self, zoom_in: bool) -> bool {
        if self.navigation.is_empty() {
            return false;
        }
        let center = self.zoom.viewport().center();
        if zoom_in {
            self.zoom.zoom_in(center)
        } else {
            self.zoom.zoom_out(center)
        }
    }

    /// One wheel notch about `pivot`; positive `notches` zoom in.
    pub fn zoom_wheel(&mut self, notches: f32, pivot: Point) -> bool {
        if notches == 0.0 || !notches.is_finite() {
            return false;
        }
        self.zoom_at(self.zoom.step().powf(notches), pivot)
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset_zoom();
    }

    pub fn set_zoom_step(&mut self, step: f32) {
        self.zoom.set_step(step);
    }

    pub fn drag_start(&mut self, position: Point) {
        self.drag.start(position);
    }

    /// Pans by the pointer motion since the last move. Returns whether the view moved.
    pub fn drag_move(&mut self, position: Point) -> bool {
        match self.drag.move_to(position) {
            Some(delta) if delta != Vector::ZERO => self.zoom.pan(delta),
            _ => false,
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.stop();
    }

    // =========================================================================
    // Directory loading
    // =========================================================================

    /// Loads `directory` through `source` and shows its first image.
    ///
    /// # Errors
    ///
    /// Returns the source's error after reporting it on the status bar; the
    /// current sequence is kept in that case.
    pub fn open_directory(
        &mut self,
        directory: &Path,
        source: &dyn ImageSource,
        store: &mut dyn SettingsStore,
        now: Instant,
        host: &mut dyn WindowHost,
    ) -> Result<usize> {
        let loaded = source.load(directory);
        self.apply_loaded(directory, loaded, store, now, host)
    }

    /// Installs the result of loading `directory`.
    ///
    /// Split from [`open_directory`](Self::open_directory) so the shell can
    /// load off the UI thread.
    pub fn apply_loaded(
        &mut self,
        directory: &Path,
        loaded: Result<Vec<ImageAsset>>,
        store: &mut dyn SettingsStore,
        now: Instant,
        host: &mut dyn WindowHost,
    ) -> Result<usize> {
        let images = match loaded {
            Ok(images) => images,
            Err(err) => {
                tracing::warn!(directory = %directory.display(), error = %err, "directory load failed");
                self.report_error(err.to_string());
                return Err(err);
            }
        };

        self.transitions.cancel(&mut self.stage);
        self.stage.clear();
        self.displayed = None;
        self.navigation.reload(images);
        self.directory = Some(directory.to_path_buf());
        self.status.set_directory(directory);
        self.grid
            .set_images(self.navigation.images(), self.navigation.current_index());

        if let Err(err) = store.save_last_directory(directory) {
            tracing::warn!(error = %err, "could not remember last directory");
        }

        let count = self.navigation.len();
        tracing::info!(directory = %directory.display(), count, "directory loaded");
        if count == 0 {
            self.zoom.set_image(None);
            self.status.clear_image();
            self.report_error(format!("No images found in {}", directory.display()));
        } else {
            self.show_current(now, host);
        }
        self.sync_rotation(now);
        Ok(count)
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Shows `message` on the status bar and queues its delayed clear.
    pub fn report_error(&mut self, message: impl Into<String>) -> StatusToken {
        let token = self.status.show_error(message);
        self.pending_status_clears.push(token);
        token
    }

    /// Clears the status error if `token` still identifies it.
    pub fn clear_status(&mut self, token: StatusToken) -> bool {
        self.status.clear_error(token)
    }

    /// Error tokens the shell has not scheduled a clear for yet.
    pub fn take_pending_status_clears(&mut self) -> Vec<StatusToken> {
        std::mem::take(&mut self.pending_status_clears)
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Advances animations, settle attempts and the rotation timer to `now`.
    pub fn tick(&mut self, now: Instant, host: &mut dyn WindowHost) -> TickOutcome {
        let outcome = self.transitions.tick(now, &mut self.stage);
        if matches!(outcome, TickOutcome::Completed(_)) {
            self.stage.prune();
        }

        if self.layout.poll(now, self.current_size(), host) > 0 {
            self.sync_viewport();
        }

        if self.rotation.as_mut().is_some_and(|timer| timer.poll(now)) {
            self.request_next(now, host);
        }
        outcome
    }

    /// Whether a transition is animating and needs frame-rate ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transitions.is_active()
    }

    /// Whether any timer is pending and needs coarse ticks.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.is_animating() || self.layout.is_settling() || self.rotation.is_some()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    fn current_size(&self) -> Option<Size> {
        self.navigation.current().map(|asset| asset.size())
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn current_asset(&self) -> Option<&Arc<ImageAsset>> {
        self.navigation.current()
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomPanEngine {
        &self.zoom
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn displayed_view(&self) -> Option<ViewId> {
        self.displayed
    }

    #[must_use]
    pub fn layout(&self) -> &AdaptiveLayoutEngine {
        &self.layout
    }

    #[must_use]
    pub fn grid(&self) -> &ThumbnailGrid<usize> {
        &self.grid
    }

    #[must_use]
    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    #[must_use]
    pub fn settings(&self) -> CarouselSettings {
        self.settings
    }

    #[must_use]
    pub fn rotation(&self) -> Option<&RotationTimer> {
        self.rotation.as_ref()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.navigation.is_paused()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.layout.is_fullscreen()
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Sets the paused flag before any directory is loaded.
    pub fn set_start_paused(&mut self, paused: bool, now: Instant) {
        self.navigation.set_paused(paused);
        self.sync_rotation(now);
    }
}
