// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::defeitos;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::projetos;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Projetos(projetos::Message),
    Defeitos(defeitos::Message),
    Snackbar(notifications::SnackbarMessage),
    /// The front alert was acknowledged.
    DismissAlert,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

impl Message {
    /// Messages produced by page widgets. They are dropped while an alert
    /// is on screen; request results and shell messages always pass.
    pub(super) fn is_page_input(&self) -> bool {
        match self {
            Message::Navbar(_) => true,
            Message::Projetos(message) => message.is_user_input(),
            Message::Defeitos(message) => message.is_user_input(),
            Message::Snackbar(_) | Message::DismissAlert | Message::WindowCloseRequested(_) => {
                false
            }
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL. Takes precedence over `QA_CONSOLE_API_URL`
    /// and the config file.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
