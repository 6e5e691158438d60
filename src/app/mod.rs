// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery screen to localization, notifications
//! and the window, and turns component effects into toasts.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::query::GalleryQuery;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("layout", &self.gallery.layout())
            .field("entries", &self.gallery.items().len())
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured initial size.
pub fn window_settings(size: Size) -> window::Settings {
    window::Settings {
        size,
        min_size: Some(Size::new(config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let window = window_settings(flags.config.window_size());

    // iced 0.14 requires a `Fn` boot; flags are cheap to clone
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the state and issues the single gallery request.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
            content_source,
        } = flags;

        let i18n = I18n::new(lang, &config);
        let window_size = config.window_size();
        let query = GalleryQuery::new(content_source, config.content_type());
        let gallery = gallery::State::new(query, window_size.width);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        let task = gallery.load().map(Message::Gallery);

        let app = App {
            i18n,
            gallery,
            notifications,
            theme_mode: config.general.theme_mode,
            window_size,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub =
            subscription::create_frame_subscription(self.gallery.is_animating(Instant::now()));
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_pending_timers());

        Subscription::batch([event_sub, frame_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}
