// SPDX-License-Identifier: MPL-2.0
//! Message routing for the application.
//!
//! Screens report what they need through their `Event` enums; this module
//! turns those events into API calls, snackbar messages and alerts.

use super::{Message, Screen};
use crate::api::{self, ApiClient};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::alert::Alert;
use crate::ui::defeitos::{self, GalleryMessage};
use crate::ui::navbar;
use crate::ui::notifications::Snackbar;
use crate::ui::projetos;
use iced::Task;
use std::collections::VecDeque;
use std::future::Future;

/// Mutable view of the application state for one update.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub api: Option<&'a ApiClient>,
    pub snackbar: &'a mut Snackbar,
    pub alerts: &'a mut VecDeque<Alert>,
    pub projetos: &'a mut projetos::State,
    pub defeitos: &'a mut defeitos::State,
}

/// Runs `call` against a clone of the client and maps its result.
///
/// Without a client the result is an immediate network error so screens
/// go through their usual failure path.
fn perform<T, Fut>(
    api: Option<&ApiClient>,
    call: impl FnOnce(ApiClient) -> Fut,
    map: impl FnOnce(Result<T, Error>) -> Message + Send + 'static,
) -> Task<Message>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T, Error>> + Send + 'static,
{
    match api {
        Some(api) => Task::perform(call(api.clone()), map),
        None => Task::done(map(Err(Error::Network(
            "HTTP client unavailable".to_string(),
        )))),
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        navbar::Event::None => Task::none(),
        navbar::Event::SwitchScreen(screen) => {
            tracing::debug!(?screen, "switching screen");
            *ctx.screen = screen;
            // Each screen refetches on entry.
            match screen {
                Screen::Projetos => handle_projetos_message(ctx, projetos::Message::Load),
                Screen::Defeitos => handle_defeitos_message(ctx, defeitos::Message::Load),
            }
        }
    }
}

pub fn handle_projetos_message(
    ctx: &mut UpdateContext<'_>,
    message: projetos::Message,
) -> Task<Message> {
    match ctx.projetos.update(message) {
        projetos::Event::None => Task::none(),
        projetos::Event::LoadCatalog => perform(
            ctx.api,
            |api| async move { api::projetos::load_catalog(&api).await },
            |result| Message::Projetos(projetos::Message::CatalogLoaded(result)),
        ),
        projetos::Event::Save(request) => perform(
            ctx.api,
            |api| async move { api::projetos::save(&api, &request).await },
            |result| Message::Projetos(projetos::Message::Saved(result)),
        ),
        projetos::Event::Saved => {
            ctx.snackbar.success(ctx.i18n.tr("projetos-saved"));
            perform(
                ctx.api,
                |api| async move { api::projetos::fetch_projetos(&api).await },
                |result| Message::Projetos(projetos::Message::ProjetosRefreshed(result)),
            )
        }
        projetos::Event::Alert(alert) => {
            push_alert(ctx.alerts, alert);
            Task::none()
        }
    }
}

pub fn handle_defeitos_message(
    ctx: &mut UpdateContext<'_>,
    message: defeitos::Message,
) -> Task<Message> {
    match ctx.defeitos.update(message) {
        defeitos::Event::None => Task::none(),
        defeitos::Event::Load => perform(
            ctx.api,
            |api| async move { api::defeitos::fetch_all(&api).await },
            |result| Message::Defeitos(defeitos::Message::Loaded(result)),
        ),
        defeitos::Event::UpdateStatus { id, status } => perform(
            ctx.api,
            move |api| async move { api::defeitos::update_status(&api, id, status).await },
            |result| Message::Defeitos(defeitos::Message::StatusUpdated(result)),
        ),
        defeitos::Event::StatusUpdated => {
            ctx.snackbar.success(ctx.i18n.tr("defeitos-status-saved"));
            handle_defeitos_message(ctx, defeitos::Message::Load)
        }
        defeitos::Event::FetchEvidencias(urls) => Task::batch(urls.into_iter().map(|url| {
            let target = url.clone();
            perform(
                ctx.api,
                |api| async move { api::defeitos::fetch_evidencia(&api, &target).await },
                move |result| {
                    Message::Defeitos(defeitos::Message::Gallery(GalleryMessage::ImageFetched {
                        url,
                        result,
                    }))
                },
            )
        })),
        defeitos::Event::Alert(alert) => {
            push_alert(ctx.alerts, alert);
            Task::none()
        }
    }
}

/// Queues `alert` behind any alert already on screen.
pub fn push_alert(alerts: &mut VecDeque<Alert>, alert: Alert) {
    tracing::debug!(key = alert.key(), "queueing alert");
    alerts.push_back(alert);
}
