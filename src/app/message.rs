// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{ImageAsset, TransitionKind};
use crate::error::Error;
use crate::ui::status::StatusToken;
use crate::ui::{thumbnail_grid, viewer_canvas};
use iced::{keyboard, window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toolbar and keyboard commands.
    Previous,
    Next,
    TogglePause,
    ToggleFullscreen,
    ToggleThumbnails,
    /// Key press no widget captured, mapped to a command in `update`.
    Keyboard(keyboard::Event),
    /// Canvas pointer input.
    Canvas(viewer_canvas::Message),
    Thumbnails(thumbnail_grid::Message),
    /// Open the folder picker.
    OpenDirectoryDialog,
    /// Result from the folder picker.
    DirectoryPicked(Option<PathBuf>),
    /// Result from scanning a directory off the UI thread.
    DirectoryLoaded {
        path: PathBuf,
        result: Result<Vec<ImageAsset>, Error>,
    },
    TransitionSelected(TransitionKind),
    RotationSpeedChanged(u32),
    /// Main window id, from `window::latest` at boot or an `Opened` event.
    WindowIdentified(Option<window::Id>),
    WindowResized(window::Id, Size),
    MonitorSize(Option<Size>),
    MaximizedChecked(bool),
    /// Periodic tick driving animations and timers.
    Tick(Instant),
    ClearStatus(StatusToken),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional directory to load on startup.
    pub directory: Option<PathBuf>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_CAROUSEL_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
