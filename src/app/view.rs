// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers from back to front: navigation and the active screen, the
//! snackbar, then the front alert.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::components::alert::{self, Alert};
use crate::ui::defeitos;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Snackbar, Toast};
use crate::ui::projetos;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub projetos: &'a projetos::State,
    pub defeitos: &'a defeitos::State,
    pub snackbar: &'a Snackbar,
    pub alert: Option<&'a Alert>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Projetos => projetos::view(projetos::ViewContext {
            i18n: ctx.i18n,
            state: ctx.projetos,
        })
        .map(Message::Projetos),
        Screen::Defeitos => defeitos::view(defeitos::ViewContext {
            i18n: ctx.i18n,
            state: ctx.defeitos,
        })
        .map(Message::Defeitos),
    };

    let page = Column::new().push(navbar).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(toast) = Toast::view_overlay(ctx.snackbar) {
        layers = layers.push(toast);
    }

    if let Some(front) = ctx.alert {
        layers = layers.push(alert::view(front, ctx.i18n, Message::DismissAlert));
    }

    layers.into()
}
