// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and detail
//! screens.
//!
//! The `App` struct wires together the screens, localization, and the API
//! client, and translates component effects into side effects like HTTP
//! fetches. Policy decisions (credential resolution, screen switching,
//! discarding late responses) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{ApiClient, Credentials};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::detail;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Root Iced application state bridging the screens, localization, and the
/// photo API client.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: gallery::State,
    detail: Option<detail::State>,
    /// `None` when no API credential could be resolved at startup; the
    /// gallery then shows the access-denied state instead of fetching.
    api: Option<ApiClient>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("photos", &self.gallery.cards().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            gallery: gallery::State::new(),
            detail: None,
            api: None,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first page fetch
    /// when an API credential is available.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        let credentials = Credentials::resolve(flags.base_url, flags.access_key, &config.api);
        let task = match ApiClient::new(&credentials) {
            Ok(client) => {
                app.api = Some(client);
                let effect = app.gallery.request_next_page();
                update::gallery_effect(&mut app, effect)
            }
            Err(error) => {
                app.gallery.fail(error);
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            detail: self.detail.as_ref(),
        })
    }
}
