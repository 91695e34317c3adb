// SPDX-License-Identifier: MPL-2.0
//! Image source port.

use crate::domain::ImageAsset;
use crate::error::Result;
use std::path::Path;

/// Yields the usable images of a directory.
///
/// Implementations decode enough of each file to know its pixel
/// dimensions, skip anything unreadable or zero-sized, and return the
/// remainder in discovery order.
///
/// # Errors
///
/// - [`Error::DirectoryAccessDenied`](crate::error::Error::DirectoryAccessDenied)
///   when the directory cannot be opened for permission reasons.
/// - [`Error::DirectoryLoadFailure`](crate::error::Error::DirectoryLoadFailure)
///   for any other failure to read the directory itself.
///
/// Failures on individual files are never errors.
pub trait ImageSource: Send + Sync {
    fn load(&self, directory: &Path) -> Result<Vec<ImageAsset>>;
}

impl<T: ImageSource + ?Sized> ImageSource for std::sync::Arc<T> {
    fn load(&self, directory: &Path) -> Result<Vec<ImageAsset>> {
        (**self).load(directory)
    }
}
