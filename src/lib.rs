// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an image carousel built with the Iced GUI framework.
//!
//! It cycles through the images of a directory with animated transitions,
//! supports pivot-preserving zoom and drag panning, and adapts the window
//! between windowed and fullscreen presentation.
//!
//! # Layers
//!
//! - [`domain`] - Plain data: images, transition kinds, settings
//! - [`application`] - Navigation state and the ports to the outside world
//! - [`infrastructure`] - Filesystem and settings adapters for those ports
//! - [`ui`] - Engines, the carousel orchestrator and widgets
//! - [`app`] - The iced application shell

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
