// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! | Key                    | Command                       |
//! |------------------------|-------------------------------|
//! | Left / Right           | Previous / next image         |
//! | Space                  | Pause or resume rotation      |
//! | Escape                 | Leave fullscreen (fullscreen only) |
//! | F11                    | Toggle fullscreen             |
//! | `+` / `=` (Ctrl/Cmd optional) | Zoom in about the viewport center |
//! | `-` (Ctrl/Cmd optional) | Zoom out about the viewport center |
//! | Ctrl/Cmd + `0`         | Reset zoom                    |

use iced::keyboard::{self, key::Named, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    TogglePause,
    ExitFullscreen,
    ToggleFullscreen,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Maps a key press to a carousel command.
#[must_use]
pub fn command_for(key: &Key, modifiers: Modifiers, fullscreen: bool) -> Option<KeyCommand> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(KeyCommand::Previous),
        Key::Named(Named::ArrowRight) => Some(KeyCommand::Next),
        Key::Named(Named::Space) => Some(KeyCommand::TogglePause),
        Key::Named(Named::Escape) if fullscreen => Some(KeyCommand::ExitFullscreen),
        Key::Named(Named::F11) => Some(KeyCommand::ToggleFullscreen),
        Key::Character(c) if !modifiers.alt() => match c.as_str() {
            "+" | "=" => Some(KeyCommand::ZoomIn),
            "-" => Some(KeyCommand::ZoomOut),
            "0" if modifiers.command() => Some(KeyCommand::ResetZoom),
            _ => None,
        },
        _ => None,
    }
}

/// Maps a raw keyboard event; only key presses produce commands.
#[must_use]
pub fn command_for_event(event: &keyboard::Event, fullscreen: bool) -> Option<KeyCommand> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => {
            command_for(key, *modifiers, fullscreen)
        }
        _ => None,
    }
}
