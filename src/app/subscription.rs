// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are turned into [`Message`]s here.
//! Pointer input over the image is handled by the viewer canvas itself.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick period while a transition is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tick period while only timers (rotation, window settling) are pending.
const TIMER_INTERVAL: Duration = Duration::from_millis(100);

/// Routes keyboard presses that no widget captured, window openings and
/// all window resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Opened { .. }) => {
            Some(Message::WindowIdentified(Some(window_id)))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(window_id, size))
        }
        event::Event::Keyboard(key_event @ keyboard::Event::KeyPressed { .. }) => match status {
            event::Status::Ignored => Some(Message::Keyboard(key_event)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the clock subscription.
///
/// Frame-rate ticks while animating, coarse ticks while only timers are
/// pending, nothing otherwise. Dropping the subscription is how timers are
/// unsubscribed.
pub fn create_tick_subscription(animating: bool, timers_pending: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else if timers_pending {
        time::every(TIMER_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
