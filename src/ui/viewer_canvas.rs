// SPDX-License-Identifier: MPL-2.0
//! Canvas that draws the transition stage under the zoom transform.
//!
//! Every attached view of the [`Stage`] is drawn fitted and centered in the
//! canvas, then offset by its transition transform. The zoom transform is
//! applied on top, so pivots reported by this widget are canvas-local.

use crate::ui::state::ZoomPanEngine;
use crate::ui::transition::Stage;
use iced::keyboard;
use iced::mouse::{self, Cursor, ScrollDelta};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::{image, Action};
use iced::{Event, Point, Rectangle, Renderer, Theme};
use std::time::{Duration, Instant};

/// Two presses closer than this count as a double-click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Pixel scroll distance treated as one wheel notch.
const PIXELS_PER_NOTCH: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DragStarted(Point),
    DragMoved(Point),
    DragEnded,
    /// Ctrl/Cmd + wheel. Positive `notches` zoom in.
    Wheel { notches: f32, pivot: Point },
    ResetZoom,
}

#[derive(Debug, Default)]
pub struct State {
    modifiers: keyboard::Modifiers,
    dragging: bool,
    last_press: Option<Instant>,
}

/// Borrowing view over the orchestrator's stage and zoom engine.
pub struct ViewerCanvas<'a> {
    stage: &'a Stage,
    zoom: &'a ZoomPanEngine,
}

impl<'a> ViewerCanvas<'a> {
    #[must_use]
    pub fn new(stage: &'a Stage, zoom: &'a ZoomPanEngine) -> Self {
        Self { stage, zoom }
    }
}

/// Converts a wheel delta into zoom notches.
#[must_use]
pub fn wheel_notches(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
    }
}

/// Rectangle an image of `size` occupies when fitted and centered in `bounds`.
#[must_use]
pub fn fit_rect(image: iced::Size, bounds: iced::Size) -> Option<Rectangle> {
    if image.width <= 0.0 || image.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    let fit = (bounds.width / image.width).min(bounds.height / image.height);
    let size = iced::Size::new(image.width * fit, image.height * fit);
    Some(Rectangle::new(
        Point::new(
            (bounds.width - size.width) / 2.0,
            (bounds.height - size.height) / 2.0,
        ),
        size,
    ))
}

impl canvas::Program<Message> for ViewerCanvas<'_> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                state.modifiers = *modifiers;
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if self.zoom.has_content() =>
            {
                let position = cursor.position_in(bounds)?;
                let now = Instant::now();
                let double = state
                    .last_press
                    .is_some_and(|last| now.duration_since(last) <= DOUBLE_CLICK_WINDOW);
                if double {
                    state.last_press = None;
                    state.dragging = false;
                    return Some(Action::publish(Message::ResetZoom).and_capture());
                }
                state.last_press = Some(now);
                state.dragging = true;
                Some(Action::publish(Message::DragStarted(position)).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if state.dragging => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::DragMoved(position)).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft)
                if state.dragging =>
            {
                state.dragging = false;
                Some(Action::publish(Message::DragEnded))
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta })
                if state.modifiers.command() && self.zoom.has_content() =>
            {
                let pivot = cursor.position_in(bounds)?;
                let notches = wheel_notches(*delta);
                Some(Action::publish(Message::Wheel { notches, pivot }).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let zoom = self.zoom.state();

        frame.with_save(|frame| {
            frame.translate(zoom.translation);
            frame.scale(zoom.scale.value());

            for (_, asset, transform) in self.stage.visible() {
                let Some(rect) = fit_rect(asset.size(), bounds.size()) else {
                    continue;
                };
                let rect = scale_about_center(rect, transform.scale);
                let rect = Rectangle {
                    x: rect.x + transform.translate_x,
                    ..rect
                };
                let handle = image::Handle::from_path(asset.locator());
                frame.draw_image(rect, canvas::Image::new(handle).opacity(transform.opacity));
            }
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && self.zoom.scale() > 1.0 {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn scale_about_center(rect: Rectangle, scale: f32) -> Rectangle {
    if (scale - 1.0).abs() < f32::EPSILON {
        return rect;
    }
    let center = rect.center();
    let width = rect.width * scale;
    let height = rect.height * scale;
    Rectangle::new(
        Point::new(center.x - width / 2.0, center.y - height / 2.0),
        iced::Size::new(width, height),
    )
}
