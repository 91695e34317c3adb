// SPDX-License-Identifier: MPL-2.0
//! [`WindowHost`] backed by iced window tasks.
//!
//! iced changes windows through `Task`s, so requests are queued and mirrored
//! into local state; `App::update` batches the queue after every message.
//! Until the window id is known nothing can be queued, and the mirror keeps
//! reporting the current mode.

use super::Message;
use crate::ui::layout::WindowHost;
use iced::{window, Point, Rectangle, Size, Task};

/// Screen size assumed until the monitor has been queried.
const FALLBACK_SCREEN: Size = Size::new(1920.0, 1080.0);

#[derive(Debug, Default)]
pub struct ShellWindow {
    id: Option<window::Id>,
    fullscreen: bool,
    maximized: bool,
    monitor: Option<Size>,
    pending: Vec<Task<Message>>,
}

impl ShellWindow {
    /// Records the main window id. Returns `true` the first time, together
    /// with the queries that should run once per window.
    pub fn identify(&mut self, id: window::Id) -> bool {
        if self.id == Some(id) {
            return false;
        }
        self.id = Some(id);
        self.pending
            .push(window::monitor_size(id).map(Message::MonitorSize));
        true
    }

    pub fn set_monitor_size(&mut self, size: Option<Size>) {
        if let Some(size) = size.filter(|s| s.width > 0.0 && s.height > 0.0) {
            self.monitor = Some(size);
        }
    }

    pub fn set_maximized_state(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    /// Asks the window system whether the window is maximized.
    pub fn query_maximized(&mut self) {
        if let Some(id) = self.id {
            self.pending
                .push(window::is_maximized(id).map(Message::MaximizedChecked));
        }
    }

    /// Window tasks queued since the last call.
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.pending))
    }

    /// Queues a window task. Returns `false` when the window is unknown.
    fn push(&mut self, task: impl FnOnce(window::Id) -> Task<Message>) -> bool {
        match self.id {
            Some(id) => {
                self.pending.push(task(id));
                true
            }
            None => {
                tracing::debug!("window request dropped: window not identified yet");
                false
            }
        }
    }
}

impl WindowHost for ShellWindow {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn visual_bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.monitor.unwrap_or(FALLBACK_SCREEN))
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        if self.push(|id| window::set_mode(id, mode)) {
            self.fullscreen = fullscreen;
        }
    }

    fn set_maximized(&mut self, maximized: bool) {
        if self.push(|id| window::maximize(id, maximized)) {
            self.maximized = maximized;
        }
    }

    fn resize(&mut self, size: Size) {
        self.push(|id| window::resize(id, size));
    }

    fn move_to(&mut self, position: Point) {
        self.push(|id| window::move_to(id, position));
    }
}
