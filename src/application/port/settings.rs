// SPDX-License-Identifier: MPL-2.0
//! Settings store port.

use crate::domain::CarouselSettings;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Simple persisted key/value state.
///
/// Loads never fail: when a value is absent or unreadable the store
/// returns its default.
pub trait SettingsStore {
    /// Last directory loaded into the carousel, if any.
    fn load_last_directory(&self) -> Option<PathBuf>;

    /// Remembers `path` as the last loaded directory.
    fn save_last_directory(&mut self, path: &Path) -> Result<()>;

    /// Rotation speed and transition style.
    fn load_settings(&self) -> CarouselSettings;

    fn save_settings(&mut self, settings: CarouselSettings) -> Result<()>;
}
