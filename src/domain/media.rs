// SPDX-License-Identifier: MPL-2.0
//! Image asset record.

use iced::Size;
use std::fmt;
use std::path::{Path, PathBuf};

/// Unique identifier for a loaded image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    /// Creates a new unique image ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

/// An image known to the carousel.
///
/// Assets are immutable once created. The display name travels with the
/// asset, so nothing ever needs to look a filename up by asset identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    id: ImageId,
    width: u32,
    height: u32,
    name: String,
    locator: PathBuf,
}

impl ImageAsset {
    /// Creates an asset from its decoded pixel dimensions and source path.
    ///
    /// The display name is the file name of `locator`.
    pub fn new(locator: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        let locator = locator.into();
        let name = locator
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| locator.display().to_string());
        Self::with_name(locator, name, width, height)
    }

    /// Creates an asset with an explicit display name.
    pub fn with_name(
        locator: impl Into<PathBuf>,
        name: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: ImageId::new(),
            width,
            height,
            name: name.into(),
            locator: locator.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions as an iced `Size`.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Display name (the file name for filesystem assets).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the pixels come from.
    #[must_use]
    pub fn locator(&self) -> &Path {
        &self.locator
    }

    /// Whether both dimensions are non-zero.
    #[must_use]
    pub fn has_pixels(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}
