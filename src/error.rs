// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only genuine failures live here. An empty collection, a zoom request that
//! clamps to the current scale, or a transition superseded by a newer one are
//! ordinary outcomes and are reported as `None`/`false`, never as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `select_index` was called with a value outside the sequence.
    #[error("index {index} is out of range for {len} images")]
    InvalidIndex { index: usize, len: usize },

    /// The image directory exists but cannot be read.
    #[error("access to {} was denied", path.display())]
    DirectoryAccessDenied { path: PathBuf },

    /// The image directory could not be scanned.
    #[error("could not load {}: {reason}", path.display())]
    DirectoryLoadFailure { path: PathBuf, reason: String },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error came from the image source and should be shown
    /// in the status bar while the current sequence stays in place.
    #[must_use]
    pub fn is_directory_error(&self) -> bool {
        matches!(
            self,
            Error::DirectoryAccessDenied { .. } | Error::DirectoryLoadFailure { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn invalid_index_mentions_bounds() {
        let err = Error::InvalidIndex { index: 7, len: 5 };
        let text = err.to_string();
        assert!(text.contains('7'));
        assert!(text.contains('5'));
    }

    #[test]
    fn directory_errors_are_classified() {
        let denied = Error::DirectoryAccessDenied {
            path: PathBuf::from("/root/secret"),
        };
        let failed = Error::DirectoryLoadFailure {
            path: PathBuf::from("/missing"),
            reason: "not found".into(),
        };
        assert!(denied.is_directory_error());
        assert!(failed.is_directory_error());
        assert!(!Error::Config("bad field".into()).is_directory_error());
        assert!(failed.to_string().contains("not found"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
