// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Windowed: toolbar, viewer, optional thumbnail strip and status bar.
//! Fullscreen: the viewer alone.

use super::Message;
use crate::config::{
    LAYOUT_PADDING, LAYOUT_SPACING, MAX_ROTATION_SECS, MIN_ROTATION_SECS, STATUS_BAR_HEIGHT,
    THUMBNAIL_PANEL_HEIGHT, TOOLBAR_HEIGHT,
};
use crate::domain::TransitionKind;
use crate::ui::carousel::CarouselOrchestrator;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::viewer_canvas::ViewerCanvas;
use iced::widget::{button, canvas, container, pick_list, slider, Column, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub carousel: &'a CarouselOrchestrator,
    pub show_thumbnails: bool,
    pub loading: bool,
}

/// Renders the application.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer = view_viewer(ctx.carousel, ctx.loading);
    if ctx.carousel.is_fullscreen() {
        return viewer;
    }

    let mut body = Column::new()
        .spacing(LAYOUT_SPACING)
        .push(view_toolbar(&ctx))
        .push(viewer);
    if ctx.show_thumbnails {
        body = body.push(
            container(ctx.carousel.grid().view().map(Message::Thumbnails))
                .height(Length::Fixed(THUMBNAIL_PANEL_HEIGHT))
                .width(Length::Fill),
        );
    }

    Column::new()
        .push(
            container(body)
                .padding(LAYOUT_PADDING)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            container(ctx.carousel.status().view())
                .height(Length::Fixed(STATUS_BAR_HEIGHT))
                .width(Length::Fill),
        )
        .into()
}

fn view_viewer(carousel: &CarouselOrchestrator, loading: bool) -> Element<'_, Message> {
    let content: Element<'_, Message> = if carousel.navigation().is_empty() {
        let hint = if loading {
            "Loading images..."
        } else {
            "Open a directory to start the carousel"
        };
        container(Text::new(hint).size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else {
        let program = ViewerCanvas::new(carousel.stage(), carousel.zoom());
        Element::from(canvas(program).width(Length::Fill).height(Length::Fill))
            .map(Message::Canvas)
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::stage)
        .into()
}

fn view_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let carousel = ctx.carousel;
    let has_images = !carousel.navigation().is_empty();
    let settings = carousel.settings();

    let nav_button = |label: &'a str, message: Message| {
        button(Text::new(label).size(typography::BODY))
            .on_press_maybe(has_images.then_some(message))
    };
    let pause_label = if carousel.is_paused() { "Play" } else { "Pause" };
    let thumbnails = button(Text::new("Thumbnails").size(typography::BODY))
        .on_press(Message::ToggleThumbnails)
        .style(if ctx.show_thumbnails {
            styles::button::toggled
        } else {
            button::secondary
        });

    let speed = settings.rotation_speed.value();
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(nav_button("Previous", Message::Previous))
        .push(nav_button(pause_label, Message::TogglePause))
        .push(nav_button("Next", Message::Next))
        .push(
            button(Text::new("Fullscreen").size(typography::BODY))
                .on_press(Message::ToggleFullscreen),
        )
        .push(thumbnails)
        .push(Space::new().width(Length::Fill))
        .push(Text::new("Transition").size(typography::CAPTION))
        .push(
            pick_list(
                TransitionKind::ALL.to_vec(),
                Some(settings.transition),
                Message::TransitionSelected,
            )
            .text_size(typography::BODY),
        )
        .push(Text::new(format!("Every {speed} s")).size(typography::CAPTION))
        .push(
            slider(
                MIN_ROTATION_SECS..=MAX_ROTATION_SECS,
                speed,
                Message::RotationSpeedChanged,
            )
            .width(Length::Fixed(120.0)),
        )
        .push(
            button(Text::new("Open...").size(typography::BODY))
                .on_press(Message::OpenDirectoryDialog),
        );

    container(row)
        .width(Length::Fill)
        .center_y(Length::Fixed(TOOLBAR_HEIGHT))
        .into()
}
