// SPDX-License-Identifier: MPL-2.0
//! Badges shared by the resource screens.
//!
//! Color and label choices are plain functions so they can be checked
//! without rendering anything.

use crate::i18n::fluent::I18n;
use crate::domain::defeito::{DefeitoStatus, Severidade};
use crate::domain::lookup::ResponsavelRef;
use crate::domain::projeto::ProjetoStatus;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, tooltip, Container};
use iced::{Color, Element};

/// How a badge is painted. `background: None` means bare colored text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeColors {
    pub background: Option<Color>,
    pub text: Color,
}

impl BadgeColors {
    const fn pill(background: Color, text: Color) -> Self {
        Self {
            background: Some(background),
            text,
        }
    }

    const fn bare(text: Color) -> Self {
        Self {
            background: None,
            text,
        }
    }
}

// =============================================================================
// Responsible user
// =============================================================================

#[must_use]
pub fn responsavel_label(reference: ResponsavelRef<'_>, i18n: &I18n) -> String {
    match reference {
        ResponsavelRef::Absent => i18n.tr("responsavel-absent"),
        ResponsavelRef::Unknown => i18n.tr("responsavel-unknown"),
        ResponsavelRef::Inactive(nome) => {
            i18n.tr_with_args("responsavel-inactive", &[("nome", nome)])
        }
        ResponsavelRef::Active(nome) => nome.to_string(),
    }
}

#[must_use]
pub fn responsavel_colors(reference: ResponsavelRef<'_>) -> BadgeColors {
    match reference {
        ResponsavelRef::Absent => BadgeColors::bare(palette::SLATE_300),
        ResponsavelRef::Unknown => BadgeColors::bare(palette::SLATE_400),
        ResponsavelRef::Inactive(_) => {
            BadgeColors::pill(palette::BADGE_RED_BG, palette::BADGE_RED_FG)
        }
        ResponsavelRef::Active(_) => {
            BadgeColors::pill(palette::BADGE_INDIGO_BG, palette::BADGE_INDIGO_FG)
        }
    }
}

/// Renders a responsible user; inactive users carry an explanatory tooltip.
pub fn responsavel<'a, M: 'a>(reference: ResponsavelRef<'_>, i18n: &I18n) -> Element<'a, M> {
    let element = view(
        responsavel_label(reference, i18n),
        responsavel_colors(reference),
    );
    if matches!(reference, ResponsavelRef::Inactive(_)) {
        tooltip(
            element,
            Container::new(text(i18n.tr("responsavel-inactive-tooltip")).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(container::rounded_box),
            tooltip::Position::Top,
        )
        .into()
    } else {
        element
    }
}

// =============================================================================
// Defect status and severity
// =============================================================================

#[must_use]
pub fn defeito_status_colors(status: &DefeitoStatus) -> BadgeColors {
    match status {
        DefeitoStatus::Aberto => BadgeColors::pill(palette::BADGE_RED_BG, palette::BADGE_RED_FG),
        DefeitoStatus::Corrigido => {
            BadgeColors::pill(palette::BADGE_GREEN_BG, palette::BADGE_GREEN_FG)
        }
        _ => BadgeColors::pill(palette::BADGE_BLUE_BG, palette::BADGE_BLUE_FG),
    }
}

pub fn defeito_status<'a, M: 'a>(status: &DefeitoStatus) -> Element<'a, M> {
    view(status.badge_label(), defeito_status_colors(status))
}

#[must_use]
pub fn severidade_color(severidade: &Severidade) -> Color {
    match severidade {
        Severidade::Critico => palette::SEVERITY_CRITICAL,
        Severidade::Alto => palette::SEVERITY_HIGH,
        Severidade::Medio => palette::SEVERITY_MEDIUM,
        Severidade::Other(_) => palette::SEVERITY_LOW,
    }
}

// =============================================================================
// Project status
// =============================================================================

#[must_use]
pub fn projeto_status_colors(status: &ProjetoStatus) -> BadgeColors {
    if status.is_active() {
        BadgeColors::pill(palette::BADGE_GREEN_BG, palette::BADGE_GREEN_FG)
    } else {
        BadgeColors::pill(palette::SLATE_100, palette::SLATE_600)
    }
}

pub fn projeto_status<'a, M: 'a>(status: &ProjetoStatus) -> Element<'a, M> {
    view(status.as_str().to_string(), projeto_status_colors(status))
}

fn view<'a, M: 'a>(label: String, colors: BadgeColors) -> Element<'a, M> {
    let label = text(label).size(typography::CAPTION).color(colors.text);
    match colors.background {
        Some(background) => Container::new(label)
            .padding([spacing::XXS / 2.0, spacing::XS])
            .style(styles::container::badge(background, colors.text))
            .into(),
        None => label.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("pt-BR".to_string()), &Config::default())
    }

    #[test]
    fn responsavel_renderings_are_distinguishable() {
        let i18n = i18n();
        let cases = [
            ResponsavelRef::Absent,
            ResponsavelRef::Unknown,
            ResponsavelRef::Inactive("Bruno"),
            ResponsavelRef::Active("Ana"),
        ];
        let rendered: Vec<(String, BadgeColors)> = cases
            .iter()
            .map(|r| (responsavel_label(*r, &i18n), responsavel_colors(*r)))
            .collect();

        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn responsavel_labels() {
        let i18n = i18n();
        assert_eq!(responsavel_label(ResponsavelRef::Absent, &i18n), "-");
        assert_eq!(responsavel_label(ResponsavelRef::Unknown, &i18n), "Desconhecido");
        assert_eq!(
            responsavel_label(ResponsavelRef::Inactive("Bruno"), &i18n),
            "Bruno (Inativo)"
        );
        assert_eq!(responsavel_label(ResponsavelRef::Active("Ana"), &i18n), "Ana");
    }

    #[test]
    fn inactive_user_uses_red_badge() {
        let colors = responsavel_colors(ResponsavelRef::Inactive("x"));
        assert_eq!(colors.background, Some(palette::BADGE_RED_BG));
        assert_eq!(colors.text, palette::BADGE_RED_FG);
    }

    #[test]
    fn status_badge_colors() {
        assert_eq!(
            defeito_status_colors(&DefeitoStatus::Aberto).text,
            palette::BADGE_RED_FG
        );
        assert_eq!(
            defeito_status_colors(&DefeitoStatus::Corrigido).text,
            palette::BADGE_GREEN_FG
        );
        assert_eq!(
            defeito_status_colors(&DefeitoStatus::EmTeste).text,
            palette::BADGE_BLUE_FG
        );
        assert_eq!(
            defeito_status_colors(&DefeitoStatus::Other("x".into())).text,
            palette::BADGE_BLUE_FG
        );
    }

    #[test]
    fn severity_colors() {
        assert_eq!(
            severidade_color(&Severidade::Critico),
            Color::from_rgb8(0xb9, 0x1c, 0x1c)
        );
        assert_eq!(severidade_color(&Severidade::Alto), palette::SEVERITY_HIGH);
        assert_eq!(severidade_color(&Severidade::Medio), palette::SEVERITY_MEDIUM);
        assert_eq!(
            severidade_color(&Severidade::Other("baixo".into())),
            palette::SEVERITY_LOW
        );
    }
}
