// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn rounded(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius::SM.into(),
    }
}

/// Primary action (save, confirm).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Disabled => palette::SLATE_300,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: rounded(background),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Secondary action (cancel, edit, refresh).
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background;
    let text_color = theme.palette().text;

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(base.strong.color)),
            text_color,
            border: rounded(palette::PRIMARY_500),
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(base.weak.color)),
            text_color: palette::SLATE_400,
            border: rounded(palette::SLATE_300),
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base.weak.color)),
            text_color,
            border: rounded(palette::SLATE_300),
            shadow: Shadow::default(),
            snap: true,
        },
    }
}

/// Tab of the navigation bar; `active` marks the current screen.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            button::Style {
                background: Some(Background::Color(palette::PRIMARY_600)),
                text_color: WHITE,
                border: rounded(palette::PRIMARY_600),
                shadow: shadow::MD,
                snap: true,
            }
        } else {
            secondary(theme, status)
        }
    }
}
