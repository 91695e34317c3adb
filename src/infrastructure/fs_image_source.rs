// SPDX-License-Identifier: MPL-2.0
//! Filesystem image source.
//!
//! Walks a directory tree, keeps files with a supported image extension and
//! reads their pixel dimensions from the file header. Files whose header
//! cannot be read are skipped, never reported as errors.
//!
//! Only the header is checked. A file with a valid header and a truncated
//! body is listed and fails later, when the viewer decodes it.

use crate::application::port::ImageSource;
use crate::domain::ImageAsset;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Lowercase extensions, without the dot, that the carousel can display.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Whether `path` has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Loads images from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsImageSource {
    recursive: bool,
}

impl Default for FsImageSource {
    fn default() -> Self {
        Self { recursive: true }
    }
}

impl FsImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only looks at the top level of the directory.
    #[must_use]
    pub fn non_recursive() -> Self {
        Self { recursive: false }
    }
}

impl ImageSource for FsImageSource {
    fn load(&self, directory: &Path) -> Result<Vec<ImageAsset>> {
        check_root(directory)?;

        let mut walker = WalkDir::new(directory).sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut images = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| !is_hidden_dir(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_supported_image(path) {
                continue;
            }
            match image_rs::image_dimensions(path) {
                Ok((width, height)) if width > 0 && height > 0 => {
                    images.push(ImageAsset::new(path, width, height));
                }
                Ok(_) => tracing::debug!(path = %path.display(), "skipping zero-sized image"),
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "skipping unreadable image");
                }
            }
        }

        tracing::debug!(directory = %directory.display(), count = images.len(), "scanned directory");
        Ok(images)
    }
}

fn check_root(directory: &Path) -> Result<()> {
    let metadata = fs::metadata(directory).map_err(|err| root_error(directory, &err))?;
    if !metadata.is_dir() {
        return Err(Error::DirectoryLoadFailure {
            path: directory.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    fs::read_dir(directory).map_err(|err| root_error(directory, &err))?;
    Ok(())
}

fn root_error(directory: &Path, err: &io::Error) -> Error {
    if err.kind() == io::ErrorKind::PermissionDenied {
        Error::DirectoryAccessDenied {
            path: directory.to_path_buf(),
        }
    } else {
        Error::DirectoryLoadFailure {
            path: directory.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    // The root itself may be a dot-directory.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
