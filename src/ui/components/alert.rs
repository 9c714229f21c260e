// SPDX-License-Identifier: MPL-2.0
//! Blocking alert dialog.
//!
//! Alerts report failures that need acknowledgement. The dialog sits on a
//! backdrop that swallows every pointer event until it is dismissed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, opaque, text, Container};
use iced::{alignment, Element, Length};

/// A message waiting for the user to acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    key: &'static str,
    reason: Option<String>,
}

impl Alert {
    /// Alert with a fixed message.
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key, reason: None }
    }

    /// Alert whose message interpolates `$reason`.
    #[must_use]
    pub fn with_reason(key: &'static str, reason: impl Into<String>) -> Self {
        Self {
            key,
            reason: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Translated text of the alert.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        match &self.reason {
            Some(reason) => i18n.tr_with_args(self.key, &[("reason", reason)]),
            None => i18n.tr(self.key),
        }
    }
}

/// Renders the dialog over a backdrop; `on_dismiss` is sent by the OK button.
pub fn view<'a, M: Clone + 'a>(alert: &Alert, i18n: &I18n, on_dismiss: M) -> Element<'a, M> {
    let ok = button(text(i18n.tr("alert-ok-button")))
        .on_press(on_dismiss)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let dialog = Container::new(
        column![
            text(alert.text(i18n)).size(typography::BODY),
            container(ok)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        ]
        .spacing(spacing::MD),
    )
    .width(Length::Fixed(sizing::ALERT_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel);

    opaque(
        container(dialog)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn text_interpolates_reason() {
        let i18n = I18n::new(Some("pt-BR".to_string()), &Config::default());
        let alert = Alert::with_reason("projetos-save-error", "Nome duplicado");
        assert_eq!(alert.text(&i18n), "Erro ao salvar projeto: Nome duplicado");
    }

    #[test]
    fn text_without_reason() {
        let i18n = I18n::new(Some("pt-BR".to_string()), &Config::default());
        assert_eq!(
            Alert::new("projetos-select-modulo").text(&i18n),
            "Selecione um módulo!"
        );
    }
}
