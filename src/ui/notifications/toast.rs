// SPDX-License-Identifier: MPL-2.0
//! Snackbar rendering.
//!
//! The overlay is a pure function of the [`Snackbar`] state. Only the card
//! captures the pointer; the rest of the layer stays click-through.

use super::manager::Snackbar;
use super::notification::Severity;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, typography};
use iced::widget::{container, opaque, text, Container};
use iced::{alignment, Background, Border, Element, Length, Padding, Theme};

/// Rough glyph width relative to the font size.
const AVG_GLYPH_RATIO: f32 = 0.55;

/// Snackbar widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the snackbar overlay, or nothing while it is hidden.
    pub fn view_overlay<'a, M: 'a>(snackbar: &'a Snackbar) -> Option<Element<'a, M>> {
        if !snackbar.is_visible() {
            return None;
        }

        let notification = snackbar.current();
        let severity = notification.severity;

        let card = Container::new(text(notification.message.as_str()).size(typography::BODY))
            .padding([sizing::SNACKBAR_PADDING_V, sizing::SNACKBAR_PADDING_H])
            .width(Length::Fixed(card_width(&notification.message)))
            .style(move |_theme: &Theme| message_style(severity));

        Some(
            Container::new(opaque(card))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(Padding {
                    top: sizing::SNACKBAR_TOP,
                    right: sizing::SNACKBAR_RIGHT,
                    bottom: 0.0,
                    left: 0.0,
                })
                .into(),
        )
    }
}

/// Card width for a message, kept between the snackbar bounds.
#[must_use]
pub fn card_width(message: &str) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let estimated = message.chars().count() as f32 * typography::BODY * AVG_GLYPH_RATIO
        + sizing::SNACKBAR_PADDING_H * 2.0;
    estimated.clamp(sizing::SNACKBAR_MIN_WIDTH, sizing::SNACKBAR_MAX_WIDTH)
}

/// Card style for a severity: white text on the severity color.
#[must_use]
pub fn message_style(severity: Severity) -> container::Style {
    container::Style {
        background: Some(Background::Color(severity.color())),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
