// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the API client, localization, and the per-screen
//! states. Screens never talk to the network: their events are turned into
//! tasks in [`update`], and results come back as messages.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::i18n::fluent::I18n;
use crate::ui::components::alert::Alert;
use crate::ui::defeitos;
use crate::ui::notifications::Snackbar;
use crate::ui::projetos;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme: Theme,
    /// `None` when the HTTP client could not be built; every request then
    /// fails through the screens' error paths.
    api: Option<ApiClient>,
    /// Transient feedback for successful operations.
    snackbar: Snackbar,
    /// Blocking dialogs for failures, shown one at a time.
    alerts: VecDeque<Alert>,
    projetos: projetos::State,
    defeitos: defeitos::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("base_url", &self.api.as_ref().map(ApiClient::base_url))
            .field("pending_alerts", &self.alerts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme: Theme::Light,
            api: None,
            snackbar: Snackbar::new(),
            alerts: VecDeque::new(),
            projetos: projetos::State::new(),
            defeitos: defeitos::State::new(),
        }
    }
}

impl App {
    /// Loads the configuration, builds the API client, and starts loading the
    /// initial screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = config::effective_base_url(flags.api_url.as_deref(), &config.api);
        let api = match ApiClient::new(base_url, &config.api) {
            Ok(api) => {
                tracing::info!(base_url = api.base_url(), "API client ready");
                Some(api)
            }
            Err(err) => {
                tracing::error!(%err, "failed to build the HTTP client");
                None
            }
        };

        let mut app = App {
            i18n,
            theme: config.general.theme_mode.theme(),
            api,
            snackbar: Snackbar::with_delay(config.notifications.dismiss_delay()),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.snackbar.warning(app.i18n.tr(&key));
        }

        let task = app.update(Message::Projetos(projetos::Message::Load));
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.label_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.snackbar.is_visible());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Keyboard input bypasses the alert's `opaque` layer, so page input is dropped here.
        if !self.alerts.is_empty() && message.is_page_input() {
            tracing::debug!(?message, "alert open, dropping page input");
            return Task::none();
        }

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            api: self.api.as_ref(),
            snackbar: &mut self.snackbar,
            alerts: &mut self.alerts,
            projetos: &mut self.projetos,
            defeitos: &mut self.defeitos,
        };

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Projetos(message) => update::handle_projetos_message(&mut ctx, message),
            Message::Defeitos(message) => update::handle_defeitos_message(&mut ctx, message),
            Message::Snackbar(message) => {
                self.snackbar.handle_message(&message);
                Task::none()
            }
            Message::DismissAlert => {
                self.alerts.pop_front();
                Task::none()
            }
            Message::WindowCloseRequested(_id) => {
                self.snackbar.teardown();
                tracing::debug!("window close requested, shutting down");
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            projetos: &self.projetos,
            defeitos: &self.defeitos,
            snackbar: &self.snackbar,
            alert: self.alerts.front(),
        })
    }
}
