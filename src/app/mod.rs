// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the video browser.
//!
//! The `App` struct wires together configuration, localization, the catalog
//! adapter and the browser component, and performs the side effects the
//! browser asks for (opening links). Problems the user should see are
//! shown as banners above the browser.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::VideoCatalog;
use crate::config::{self, Config};
use crate::domain::error::FetchError;
use crate::domain::video::{PageResult, VideoQuery};
use crate::i18n::I18n;
use crate::infrastructure::{browser as web_browser, HttpCatalog};
use crate::ui::browser::{self, ViewEnv};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced::widget::{Column, Container};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    browser: browser::State,
    catalog: Arc<dyn VideoCatalog>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("browser", &self.browser)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests are routed through `update` so the browser can tear down
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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
    /// Loads preferences, builds the catalog client and issues the first request.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::boot(&flags, config, config_warning)
    }

    /// Builds the application from already loaded settings.
    ///
    /// `config_warning` is the i18n key returned by [`config::load`] when the
    /// settings file could not be used; it is shown as a banner.
    fn boot(
        flags: &Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let catalog = build_catalog(&config, flags.server.as_deref());
        let (mut app, task) = Self::with_catalog(config, i18n, catalog);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
            app.notifications.push(Notification::warning(key));
        }
        (app, task)
    }

    /// Builds the application around an existing catalog.
    pub fn with_catalog(
        config: Config,
        i18n: I18n,
        catalog: Arc<dyn VideoCatalog>,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            i18n,
            browser: browser::State::new(
                config.debounce_delay(),
                config::THUMBNAIL_CACHE_CAPACITY,
            ),
            catalog,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        };

        let task = app.browser.start(app.catalog.as_ref()).map(Message::Browser);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browser(msg) => {
                let (effect, task) = self.browser.handle_message(msg, self.catalog.as_ref());
                let task = task.map(Message::Browser);
                match effect {
                    browser::Effect::None => task,
                    browser::Effect::OpenUrl(url) => {
                        self.open_link(&url);
                        task
                    }
                }
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.browser.teardown();
                window::close(id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let browser = self
            .browser
            .view(ViewEnv { i18n: &self.i18n })
            .map(Message::Browser);

        if !self.notifications.has_notifications() {
            return browser;
        }

        let banners = notifications::banner::view_all(&self.notifications, &self.i18n)
            .map(Message::Notification);
        Column::new()
            .push(
                Container::new(banners)
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::LG]),
            )
            .push(browser)
            .into()
    }

    /// The browser component, for inspection.
    #[must_use]
    pub fn browser(&self) -> &browser::State {
        &self.browser
    }

    /// Banners currently shown above the browser.
    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn open_link(&mut self, url: &str) {
        if let Err(err) = web_browser::open_url(url) {
            tracing::warn!(%url, error = %err, "{}", self.i18n.tr("notification-open-link-error"));
            self.notifications
                .push(Notification::error("notification-open-link-error"));
        }
    }
}

/// Base URL in effect: `--server` when given, otherwise the configured one.
fn effective_base_url<'a>(config: &'a Config, server_override: Option<&'a str>) -> &'a str {
    server_override
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| config.base_url())
}

/// Creates the HTTP catalog for the effective base URL.
fn build_catalog(config: &Config, server_override: Option<&str>) -> Arc<dyn VideoCatalog> {
    let base_url = effective_base_url(config, server_override);
    match HttpCatalog::new(base_url, config.request_timeout()) {
        Ok(catalog) => {
            tracing::info!(url = catalog.videos_url(), "using video catalog");
            Arc::new(catalog)
        }
        Err(err) => {
            tracing::error!(%base_url, error = %err, "cannot create HTTP client");
            Arc::new(UnavailableCatalog(err))
        }
    }
}

/// Catalog used when no HTTP client could be built; every request fails
/// with the construction error.
struct UnavailableCatalog(FetchError);

impl VideoCatalog for UnavailableCatalog {
    fn fetch_page(&self, _query: VideoQuery) -> BoxFuture<'static, Result<PageResult, FetchError>> {
        let err = self.0.clone();
        async move { Err(err) }.boxed()
    }

    fn fetch_thumbnail(&self, _url: String) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let err = self.0.clone();
        async move { Err(err) }.boxed()
    }
}
