// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR.
//!
//! Unlike `settings.toml`, this file is not meant to be edited by hand.
//! It records where the user was, so the next launch can reopen it.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
pub const STATE_FILE: &str = "state.cbor";

/// Carousel state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory most recently loaded into the carousel.
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns `(state, warning)`; on any failure the state is the default
    /// and the warning says what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir` (or the default data directory).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => (
                    Self::default(),
                    Some(format!("Could not parse {}: {err}", path.display())),
                ),
            },
            Err(err) => (
                Self::default(),
                Some(format!("Could not read {}: {err}", path.display())),
            ),
        }
    }

    /// Saves state to the default location, returning a warning on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state under `base_dir` (or the default data directory).
    ///
    /// Creates the directory when missing.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path(base_dir) else {
            return Some("No data directory available for session state".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                return Some(format!("Could not create {}: {err}", parent.display()));
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(err) => return Some(format!("Could not create {}: {err}", path.display())),
        };
        ciborium::into_writer(self, BufWriter::new(file))
            .err()
            .map(|err| format!("Could not write {}: {err}", path.display()))
    }

    /// Records `directory` as the last loaded directory.
    pub fn remember_directory(&mut self, directory: &Path) {
        self.last_directory = Some(directory.to_path_buf());
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}
