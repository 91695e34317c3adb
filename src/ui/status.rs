// SPDX-License-Identifier: MPL-2.0
//! Status bar state.
//!
//! Holds the directory label, the current image's summary and at most one
//! transient error. Each error gets a [`StatusToken`]; the shell clears it
//! after [`STATUS_CLEAR_DELAY`](crate::config::STATUS_CLEAR_DELAY) by
//! sending the token back, and a stale token never clears a newer error.

use crate::domain::ImageAsset;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Row, Space, Text};
use iced::{Element, Length};
use std::path::Path;

/// Identifies one error shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusToken(u64);

impl StatusToken {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    directory: Option<String>,
    image_info: Option<String>,
    error: Option<(StatusToken, String)>,
}

impl StatusBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_directory(&mut self, directory: &Path) {
        self.directory = Some(format!("Directory: {}", directory.display()));
    }

    /// Summarizes `asset` at `index` of `len` images.
    pub fn set_image(&mut self, asset: &ImageAsset, index: usize, len: usize) {
        self.image_info = Some(format!(
            "{} - {}x{} - {}/{}",
            asset.name(),
            asset.width(),
            asset.height(),
            index + 1,
            len
        ));
    }

    pub fn clear_image(&mut self) {
        self.image_info = None;
    }

    /// Shows `message`, replacing any current error.
    pub fn show_error(&mut self, message: impl Into<String>) -> StatusToken {
        let token = StatusToken::new();
        self.error = Some((token, message.into()));
        token
    }

    /// Clears the error if `token` still identifies it. Returns whether it did.
    pub fn clear_error(&mut self, token: StatusToken) -> bool {
        if self.error.as_ref().is_some_and(|(current, _)| *current == token) {
            self.error = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    #[must_use]
    pub fn image_info(&self) -> Option<&str> {
        self.image_info.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|(_, message)| message.as_str())
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        let left: Element<'a, M> = match &self.error {
            Some((_, message)) => container(Text::new(message.as_str()).size(typography::BODY))
                .style(styles::container::error_text)
                .into(),
            None => Text::new(self.directory.as_deref().unwrap_or("No directory loaded"))
                .size(typography::BODY)
                .into(),
        };

        let right = Text::new(self.image_info.as_deref().unwrap_or_default()).size(typography::BODY);

        let row = Row::new()
            .spacing(spacing::SM)
            .push(left)
            .push(Space::new().width(Length::Fill))
            .push(right);

        container(row)
            .padding([spacing::XXS, spacing::XS])
            .width(Length::Fill)
            .style(styles::container::bar)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_summary_is_one_based() {
        let mut status = StatusBar::new();
        status.set_image(&ImageAsset::new("/p/beach.png", 640, 480), 2, 12);
        assert_eq!(status.image_info(), Some("beach.png - 640x480 - 3/12"));
    }

    #[test]
    fn stale_token_does_not_clear_newer_error() {
        let mut status = StatusBar::new();
        let first = status.show_error("Access denied");
        let second = status.show_error("Directory missing");

        assert!(!status.clear_error(first));
        assert_eq!(status.error(), Some("Directory missing"));

        assert!(status.clear_error(second));
        assert_eq!(status.error(), None);
    }

    #[test]
    fn directory_label_includes_path() {
        let mut status = StatusBar::new();
        status.set_directory(Path::new("/photos"));
        assert_eq!(status.directory(), Some("Directory: /photos"));
    }
}
