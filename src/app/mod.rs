// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the carousel orchestrator to iced: it owns the
//! settings store, the image source and the window adapter, and translates
//! messages into orchestrator calls plus side effects such as persistence
//! or directory loading.

pub mod paths;
pub mod persisted_state;
mod message;
mod subscription;
mod update;
mod view;
mod window_host;

pub use message::{Flags, Message};
pub use window_host::ShellWindow;

use crate::application::port::SettingsStore;
use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::infrastructure::{FileSettingsStore, FsImageSource};
use crate::ui::carousel::CarouselOrchestrator;
use crate::ui::layout::Chrome;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;

/// Root Iced application state.
pub struct App {
    carousel: CarouselOrchestrator,
    window: ShellWindow,
    store: FileSettingsStore,
    source: Arc<FsImageSource>,
    show_thumbnails: bool,
    /// Directory currently being scanned, if any.
    loading: Option<std::path::PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.carousel.directory())
            .field("images", &self.carousel.navigation().len())
            .field("loading", &self.loading)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Space reserved around the image in a window.
pub fn shell_chrome(show_thumbnails: bool) -> Chrome {
    if show_thumbnails {
        Chrome::shell_with_thumbnails()
    } else {
        Chrome::shell()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and kicks off loading of the startup directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);
        let (store, warnings) = FileSettingsStore::open();
        let config = store.config().clone();

        let show_thumbnails = config.display.show_thumbnails.unwrap_or(true);
        let mut carousel = CarouselOrchestrator::new(
            store.load_settings(),
            shell_chrome(show_thumbnails),
            config.zoom_step(),
        );
        carousel.set_start_paused(config.carousel.start_paused.unwrap_or(false), now);
        for warning in warnings {
            tracing::warn!(%warning, "settings fallback");
            carousel.report_error(warning);
        }

        let mut app = App {
            carousel,
            window: ShellWindow::default(),
            show_thumbnails,
            store,
            source: Arc::new(FsImageSource::new()),
            loading: None,
        };

        let directory = flags
            .directory
            .or_else(|| app.store.load_last_directory());
        let load = match directory {
            Some(directory) => update::load_directory(&mut app.update_context(), directory),
            None => Task::none(),
        };
        let clears = update::schedule_status_clears(&mut app.carousel);
        let identify = window::latest().map(Message::WindowIdentified);

        (app, Task::batch([identify, load, clears]))
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            carousel: &mut self.carousel,
            window: &mut self.window,
            store: &mut self.store,
            source: &self.source,
            show_thumbnails: &mut self.show_thumbnails,
            loading: &mut self.loading,
        }
    }

    fn title(&self) -> String {
        let app_name = "Image Carousel";
        match self.carousel.current_asset() {
            Some(asset) => format!("{} - {app_name}", asset.name()),
            None => app_name.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.carousel.is_animating(),
            self.carousel.needs_ticks(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::handle_message(&mut self.update_context(), message);
        let clears = update::schedule_status_clears(&mut self.carousel);
        let window = self.window.take_tasks();
        Task::batch([task, clears, window])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            carousel: &self.carousel,
            show_thumbnails: self.show_thumbnails,
            loading: self.loading.is_some(),
        })
    }
}
