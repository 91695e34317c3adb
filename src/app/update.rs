// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every handler follows the same shape: call into the orchestrator with
//! the current time and the window adapter, then return the side effects
//! (directory scans, dialogs, scroll operations) as a `Task`.

use super::{Message, ShellWindow};
use crate::application::port::{ImageSource, SettingsStore};
use crate::config::STATUS_CLEAR_DELAY;
use crate::domain::{CarouselSettings, ImageAsset, RotationSpeed};
use crate::error::{Error, Result};
use crate::infrastructure::{FileSettingsStore, FsImageSource};
use crate::ui::carousel::CarouselOrchestrator;
use crate::ui::keybindings::{self, KeyCommand};
use crate::ui::thumbnail_grid;
use crate::ui::viewer_canvas;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub carousel: &'a mut CarouselOrchestrator,
    pub window: &'a mut ShellWindow,
    pub store: &'a mut FileSettingsStore,
    pub source: &'a Arc<FsImageSource>,
    pub show_thumbnails: &'a mut bool,
    pub loading: &'a mut Option<PathBuf>,
}

/// Dispatches a top-level message.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    let now = Instant::now();
    match message {
        Message::Previous => {
            ctx.carousel.request_previous(now, &mut *ctx.window);
            reveal_selection(ctx)
        }
        Message::Next => {
            ctx.carousel.request_next(now, &mut *ctx.window);
            reveal_selection(ctx)
        }
        Message::TogglePause => {
            ctx.carousel.toggle_pause(now);
            Task::none()
        }
        Message::ToggleFullscreen => {
            ctx.carousel.toggle_fullscreen(now, &mut *ctx.window);
            Task::none()
        }
        Message::ToggleThumbnails => {
            *ctx.show_thumbnails = !*ctx.show_thumbnails;
            ctx.carousel
                .set_chrome(super::shell_chrome(*ctx.show_thumbnails), &mut *ctx.window);
            reveal_selection(ctx)
        }
        Message::Keyboard(event) => {
            match keybindings::command_for_event(&event, ctx.carousel.is_fullscreen()) {
                Some(command) => handle_key_command(ctx, command, now),
                None => Task::none(),
            }
        }
        Message::Canvas(message) => {
            handle_canvas(ctx.carousel, message);
            Task::none()
        }
        Message::Thumbnails(message) => {
            if let Err(err) = ctx.carousel.handle_thumbnail(message, now, &mut *ctx.window) {
                tracing::warn!(error = %err, "thumbnail selection rejected");
                ctx.carousel.report_error(err.to_string());
            }
            reveal_selection(ctx)
        }
        Message::OpenDirectoryDialog => {
            let start = ctx
                .carousel
                .directory()
                .map(PathBuf::from)
                .or_else(|| ctx.store.load_last_directory());
            open_directory_dialog(start)
        }
        Message::DirectoryPicked(Some(path)) => load_directory(ctx, path),
        Message::DirectoryPicked(None) => Task::none(),
        Message::DirectoryLoaded { path, result } => {
            *ctx.loading = None;
            match ctx
                .carousel
                .apply_loaded(&path, result, &mut *ctx.store, now, &mut *ctx.window)
            {
                Ok(count) => {
                    tracing::debug!(directory = %path.display(), count, "directory shown");
                    reveal_selection(ctx)
                }
                Err(err) => {
                    tracing::warn!(directory = %path.display(), error = %err, "keeping previous images");
                    Task::none()
                }
            }
        }
        Message::TransitionSelected(kind) => update_settings(ctx, now, |settings| {
            settings.transition = kind;
        }),
        Message::RotationSpeedChanged(secs) => update_settings(ctx, now, |settings| {
            settings.rotation_speed = RotationSpeed::new(secs);
        }),
        Message::WindowIdentified(Some(id)) => {
            ctx.window.identify(id);
            ctx.window.query_maximized();
            Task::none()
        }
        Message::WindowIdentified(None) => Task::none(),
        Message::WindowResized(id, size) => {
            ctx.window.identify(id);
            ctx.carousel.on_window_resize(size);
            ctx.window.query_maximized();
            Task::none()
        }
        Message::MonitorSize(size) => {
            ctx.window.set_monitor_size(size);
            Task::none()
        }
        Message::MaximizedChecked(maximized) => {
            ctx.window.set_maximized_state(maximized);
            Task::none()
        }
        Message::Tick(instant) => {
            let before = ctx.carousel.navigation().current_index();
            ctx.carousel.tick(instant, &mut *ctx.window);
            if ctx.carousel.navigation().current_index() != before {
                reveal_selection(ctx)
            } else {
                Task::none()
            }
        }
        Message::ClearStatus(token) => {
            ctx.carousel.clear_status(token);
            Task::none()
        }
    }
}

fn handle_key_command(
    ctx: &mut UpdateContext<'_>,
    command: KeyCommand,
    now: Instant,
) -> Task<Message> {
    match command {
        KeyCommand::Previous => return handle_message(ctx, Message::Previous),
        KeyCommand::Next => return handle_message(ctx, Message::Next),
        KeyCommand::TogglePause => {
            ctx.carousel.toggle_pause(now);
        }
        KeyCommand::ExitFullscreen => ctx.carousel.exit_fullscreen(now, &mut *ctx.window),
        KeyCommand::ToggleFullscreen => ctx.carousel.toggle_fullscreen(now, &mut *ctx.window),
        KeyCommand::ZoomIn => {
            ctx.carousel.zoom_step(true);
        }
        KeyCommand::ZoomOut => {
            ctx.carousel.zoom_step(false);
        }
        KeyCommand::ResetZoom => ctx.carousel.reset_zoom(),
    }
    Task::none()
}

fn handle_canvas(carousel: &mut CarouselOrchestrator, message: viewer_canvas::Message) {
    match message {
        viewer_canvas::Message::DragStarted(position) => carousel.drag_start(position),
        viewer_canvas::Message::DragMoved(position) => {
            carousel.drag_move(position);
        }
        viewer_canvas::Message::DragEnded => carousel.drag_end(),
        viewer_canvas::Message::Wheel { notches, pivot } => {
            carousel.zoom_wheel(notches, pivot);
        }
        viewer_canvas::Message::ResetZoom => carousel.reset_zoom(),
    }
}

fn update_settings(
    ctx: &mut UpdateContext<'_>,
    now: Instant,
    change: impl FnOnce(&mut CarouselSettings),
) -> Task<Message> {
    let mut settings = ctx.carousel.settings();
    change(&mut settings);
    ctx.carousel.apply_settings(settings, now);
    if let Err(err) = ctx.store.save_settings(settings) {
        tracing::warn!(error = %err, "could not save settings");
        ctx.carousel.report_error(format!("Could not save settings: {err}"));
    }
    Task::none()
}

/// Scrolls the thumbnail grid so the selected cell is visible.
fn reveal_selection(ctx: &UpdateContext<'_>) -> Task<Message> {
    if !*ctx.show_thumbnails || ctx.carousel.grid().is_empty() {
        return Task::none();
    }
    operation::snap_to(
        Id::new(thumbnail_grid::SCROLLABLE_ID),
        ctx.carousel.grid().relative_offset(),
    )
}

/// Scans `directory` on the blocking pool, off the UI thread.
pub fn load_directory(ctx: &mut UpdateContext<'_>, directory: PathBuf) -> Task<Message> {
    tracing::info!(directory = %directory.display(), "loading directory");
    *ctx.loading = Some(directory.clone());
    let source = Arc::clone(ctx.source);
    Task::perform(scan_directory(source, directory), |(path, result)| {
        Message::DirectoryLoaded { path, result }
    })
}

/// Runs `source.load` on the blocking pool.
async fn scan_directory(
    source: Arc<FsImageSource>,
    directory: PathBuf,
) -> (PathBuf, Result<Vec<ImageAsset>>) {
    let path = directory.clone();
    let result = tokio::task::spawn_blocking(move || source.load(&path))
        .await
        .map_err(|err| Error::DirectoryLoadFailure {
            path: directory.clone(),
            reason: err.to_string(),
        })
        .and_then(|result| result);
    (directory, result)
}

/// Schedules the delayed clear of every newly shown status error.
pub fn schedule_status_clears(carousel: &mut CarouselOrchestrator) -> Task<Message> {
    Task::batch(
        carousel
            .take_pending_status_clears()
            .into_iter()
            .map(|token| {
                Task::perform(
                    async move {
                        tokio::time::sleep(STATUS_CLEAR_DELAY).await;
                        token
                    },
                    Message::ClearStatus,
                )
            }),
    )
}

fn open_directory_dialog(start: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Open Image Directory");
            if let Some(dir) = start {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }
            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::DirectoryPicked,
    )
}
