// SPDX-License-Identifier: MPL-2.0
//! Settings store adapters.
//!
//! [`FileSettingsStore`] splits its data the same way the rest of the app
//! does: user-editable settings go to `settings.toml` in the config
//! directory, the last opened directory goes to the CBOR state file in the
//! data directory.

use crate::app::persisted_state::AppState;
use crate::application::port::SettingsStore;
use crate::config::{self, Config};
use crate::domain::CarouselSettings;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Fallback directory when nothing has been loaded before.
fn default_directory() -> Option<PathBuf> {
    dirs::picture_dir()
}

/// Settings persisted on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    config: Config,
    state: AppState,
}

impl FileSettingsStore {
    /// Opens the store at the default locations.
    ///
    /// Returns the store and any warnings raised while reading; unreadable
    /// files fall back to defaults.
    pub fn open() -> (Self, Vec<String>) {
        Self::open_with_overrides(None, None)
    }

    /// Opens the store with optional directory overrides.
    pub fn open_with_overrides(
        config_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> (Self, Vec<String>) {
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let (state, state_warning) = AppState::load_from(data_dir.clone());
        let warnings = config_warning.into_iter().chain(state_warning).collect();
        (
            Self {
                config_dir,
                data_dir,
                config,
                state,
            },
            warnings,
        )
    }

    /// Full configuration as loaded, including display options.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl SettingsStore for FileSettingsStore {
    fn load_last_directory(&self) -> Option<PathBuf> {
        self.state.last_directory.clone().or_else(default_directory)
    }

    fn save_last_directory(&mut self, path: &Path) -> Result<()> {
        self.state.remember_directory(path);
        match self.state.save_to(self.data_dir.clone()) {
            Some(warning) => Err(Error::Io(warning)),
            None => Ok(()),
        }
    }

    fn load_settings(&self) -> CarouselSettings {
        self.config.carousel_settings()
    }

    fn save_settings(&mut self, settings: CarouselSettings) -> Result<()> {
        self.config.set_carousel_settings(settings);
        config::save_with_override(&self.config, self.config_dir.clone())
    }
}

/// Settings kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    last_directory: Option<PathBuf>,
    settings: CarouselSettings,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: CarouselSettings) -> Self {
        Self {
            last_directory: None,
            settings,
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load_last_directory(&self) -> Option<PathBuf> {
        self.last_directory.clone()
    }

    fn save_last_directory(&mut self, path: &Path) -> Result<()> {
        self.last_directory = Some(path.to_path_buf());
        Ok(())
    }

    fn load_settings(&self) -> CarouselSettings {
        self.settings
    }

    fn save_settings(&mut self, settings: CarouselSettings) -> Result<()> {
        self.settings = settings;
        Ok(())
    }
}
