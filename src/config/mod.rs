// SPDX-License-Identifier: MPL-2.0
//! This module handles the carousel's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[carousel]` - Slideshow interval, transition style, start paused
//! - `[display]` - Zoom step and thumbnail grid visibility
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config;
//! use iced_carousel::domain::TransitionKind;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.carousel.transition = Some(TransitionKind::SlideLeft);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{CarouselSettings, RotationSpeed, TransitionKind};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Seconds between automatic advances (1–10).
    #[serde(
        default = "default_rotation_speed_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_speed_secs: Option<u32>,

    /// Transition style used on image changes.
    #[serde(default = "default_transition", skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionKind>,

    /// Whether automatic rotation starts paused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_paused: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            rotation_speed_secs: default_rotation_speed_secs(),
            transition: default_transition(),
            start_paused: Some(false),
        }
    }
}

/// Viewer display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Multiplier applied per zoom step.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Whether the thumbnail grid is shown under the viewer.
    #[serde(
        default = "default_show_thumbnails",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_thumbnails: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            show_thumbnails: default_show_thumbnails(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Carousel settings with out-of-range values clamped.
    #[must_use]
    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            rotation_speed: self
                .carousel
                .rotation_speed_secs
                .map(RotationSpeed::new)
                .unwrap_or_default(),
            transition: self.carousel.transition.unwrap_or_default(),
        }
    }

    /// Writes carousel settings back into the `[carousel]` section.
    pub fn set_carousel_settings(&mut self, settings: CarouselSettings) {
        self.carousel.rotation_speed_secs = Some(settings.rotation_speed.value());
        self.carousel.transition = Some(settings.transition);
    }

    /// Zoom step factor, clamped to the accepted range.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        self.display
            .zoom_step
            .filter(|step| step.is_finite())
            .unwrap_or(DEFAULT_ZOOM_STEP_FACTOR)
            .clamp(MIN_ZOOM_STEP_FACTOR, MAX_ZOOM_STEP_FACTOR)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_rotation_speed_secs() -> Option<u32> {
    Some(DEFAULT_ROTATION_SECS)
}

fn default_transition() -> Option<TransitionKind> {
    Some(TransitionKind::default())
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP_FACTOR)
}

fn default_show_thumbnails() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!("Could not read {}: {err}", path.display())),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
