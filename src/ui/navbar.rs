// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with one tab per screen.

use crate::i18n::fluent::I18n;
use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchScreen(Screen),
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the screen already shown does nothing.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Select(screen) if screen != current => Event::SwitchScreen(screen),
        Message::Select(_) => Event::None,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let row = Screen::ALL.iter().fold(
        Row::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .align_y(Vertical::Center)
            .push(title),
        |row, screen| {
            let active = *screen == ctx.current;
            row.push(
                button(Text::new(ctx.i18n.tr(screen.label_key())))
                    .on_press(Message::Select(*screen))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::tab(active)),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_other_screen_switches() {
        assert_eq!(
            update(Message::Select(Screen::Defeitos), Screen::Projetos),
            Event::SwitchScreen(Screen::Defeitos)
        );
    }

    #[test]
    fn selecting_current_screen_is_noop() {
        assert_eq!(
            update(Message::Select(Screen::Projetos), Screen::Projetos),
            Event::None
        );
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            current: Screen::Defeitos,
        });
    }
}
