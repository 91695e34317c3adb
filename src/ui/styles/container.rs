// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar and status bar surface, derived from the theme background.
pub fn bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Backdrop behind the displayed image.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}

/// Error text in the status bar.
pub fn error_text(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}
