// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`image_source`]: Directory scanning into image assets
//! - [`settings`]: Persisted settings and last-used directory
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no filesystem walkers)
//! - Methods return `Result` with the crate error type
//! - No `async fn` - callers wrap slow calls in an Iced `Task`

pub mod image_source;
pub mod settings;

pub use image_source::ImageSource;
pub use settings::SettingsStore;
