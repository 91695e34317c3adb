// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure carousel types.
//!
//! These types carry no UI handles and no I/O. They are shared by the
//! application ports, the infrastructure adapters and the UI engines.
//!
//! - [`media`]: Image assets yielded by an image source
//! - [`transition`]: Transition styles and their timing
//! - [`settings`]: User-adjustable carousel settings

pub mod media;
pub mod settings;
pub mod transition;

pub use media::{ImageAsset, ImageId};
pub use settings::{CarouselSettings, RotationSpeed};
pub use transition::{TransitionKind, TransitionSpec};
