// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, exposes a `Message` enum and an `update` that returns
//! what the parent should act on.
//!
//! # Engines
//!
//! - [`carousel`] - Orchestrator that composes every engine below
//! - [`transition`] - Animated hand-over between the outgoing and incoming image
//! - [`layout`] - Window sizing and fullscreen handling
//! - [`state`] - Zoom, pan, viewport and rotation timer state
//!
//! # Widgets
//!
//! - [`viewer_canvas`] - Canvas drawing the stage under the zoom transform
//! - [`thumbnail_grid`] - Scrollable grid of clickable thumbnails
//! - [`status`] - Status bar with directory, image info and transient errors
//!
//! # Shared Infrastructure
//!
//! - [`keybindings`] - Keyboard shortcuts
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel;
pub mod design_tokens;
pub mod keybindings;
pub mod layout;
pub mod state;
pub mod status;
pub mod styles;
pub mod thumbnail_grid;
pub mod transition;
pub mod viewer_canvas;
