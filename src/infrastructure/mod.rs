// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits in `application::port`:
//!
//! - [`fs_image_source`]: images from a local directory (implements [`ImageSource`])
//! - [`settings_store`]: settings on disk or in memory (implements [`SettingsStore`])
//!
//! [`ImageSource`]: crate::application::port::ImageSource
//! [`SettingsStore`]: crate::application::port::SettingsStore

pub mod fs_image_source;
pub mod settings_store;

pub use fs_image_source::{is_supported_image, FsImageSource, SUPPORTED_EXTENSIONS};
pub use settings_store::{FileSettingsStore, MemorySettingsStore};
