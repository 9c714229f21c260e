// SPDX-License-Identifier: MPL-2.0
//! Rendering of the defect screen.

use super::{format, Message, State, StatusChoice};
use crate::i18n::fluent::I18n;
use crate::domain::defeito::{Defeito, DefeitoStatus};
use crate::domain::lookup::ResponsavelRef;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{
    button, column, container, pick_list, row, scrollable, stack, text, Column, Container, Row,
};
use iced::{alignment, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

const COLUMNS: [(&str, u16); 8] = [
    ("defeitos-col-id", 1),
    ("defeitos-col-origem", 3),
    ("defeitos-col-erro", 4),
    ("defeitos-col-evidencias", 2),
    ("defeitos-col-severidade", 2),
    ("defeitos-col-status", 2),
    ("defeitos-col-registado", 2),
    ("defeitos-col-acoes", 2),
];

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = row![
        text(i18n.tr("defeitos-title")).size(typography::TITLE_LG),
        container(
            button(text(i18n.tr("defeitos-refresh-button")))
                .on_press(Message::Load)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary)
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right),
    ]
    .align_y(alignment::Vertical::Center);

    let page = scrollable(
        column![header, table_card(&ctx)]
            .spacing(spacing::LG)
            .padding(spacing::LG),
    )
    .height(Length::Fill);

    match &ctx.state.gallery {
        Some(gallery) => stack![page, gallery.view(i18n).map(Message::Gallery)].into(),
        None => page.into(),
    }
}

fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn table_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let body: Element<'a, Message> = if state.loading {
        text(i18n.tr("defeitos-loading")).into()
    } else if state.defeitos.is_empty() {
        text(i18n.tr("defeitos-empty")).color(palette::SLATE_400).into()
    } else {
        let header = COLUMNS.iter().fold(Row::new().spacing(spacing::SM), |row, (key, portion)| {
            row.push(cell(text(i18n.tr(key)).size(typography::CAPTION), *portion))
        });
        state
            .defeitos
            .iter()
            .fold(
                Column::new().spacing(spacing::XS).push(
                    container(header)
                        .padding(spacing::XS)
                        .style(styles::container::header_row),
                ),
                |rows, defeito| rows.push(defeito_row(defeito, ctx)),
            )
            .into()
    };

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn status_label(status: &DefeitoStatus, i18n: &I18n) -> String {
    match status {
        DefeitoStatus::Other(raw) => raw.clone(),
        known => i18n.tr(&format!("defeito-status-{}", known.as_str().replace('_', "-"))),
    }
}

fn defeito_row<'a>(defeito: &'a Defeito, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let small = |label: String| text(label).size(typography::CAPTION);

    let id = text(format::id(defeito.id)).color(palette::SLATE_400);

    let origem = column![
        text(
            defeito
                .caso_teste_nome()
                .map_or_else(|| i18n.tr("defeitos-teste-removido"), str::to_string)
        )
        .font(BOLD),
        badge::responsavel::<Message>(ResponsavelRef::nested(defeito.responsavel()), i18n),
    ]
    .spacing(spacing::XXS);

    let erro = column![
        text(defeito.titulo.as_str()).font(BOLD),
        text(defeito.descricao.as_deref().unwrap_or_default())
            .size(typography::CAPTION)
            .color(palette::SLATE_600),
    ]
    .spacing(spacing::XXS);

    let evidencias: Element<'a, Message> = if defeito.evidencias().is_empty() {
        text("-").color(palette::SLATE_300).into()
    } else {
        button(small(i18n.tr("defeitos-evidencias-button")))
            .on_press(Message::OpenGallery(defeito.id))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::secondary)
            .into()
    };

    let severidade = small(defeito.severidade.as_str().to_uppercase())
        .font(BOLD)
        .color(badge::severidade_color(&defeito.severidade));

    let editing = state.is_editing(defeito.id);

    let status: Element<'a, Message> = if editing {
        let choices: Vec<StatusChoice> = DefeitoStatus::ALL
            .iter()
            .map(|status| StatusChoice {
                status: status.clone(),
                label: status_label(status, i18n),
            })
            .collect();
        pick_list(
            choices,
            Some(StatusChoice {
                status: state.status_form.clone(),
                label: status_label(&state.status_form, i18n),
            }),
            Message::StatusSelected,
        )
        .text_size(typography::CAPTION)
        .into()
    } else {
        badge::defeito_status::<Message>(&defeito.status)
    };

    let registado = small(format::created_at(defeito.created_at.as_deref()))
        .color(palette::SLATE_600);

    let acoes: Element<'a, Message> = if editing {
        row![
            button(small(i18n.tr("defeitos-status-ok")))
                .on_press(Message::SaveStatus(defeito.id))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::primary),
            button(small(i18n.tr("defeitos-status-cancel")))
                .on_press(Message::CancelEdit)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::secondary),
        ]
        .spacing(spacing::XXS)
        .into()
    } else {
        button(small(i18n.tr("defeitos-status-button")))
            .on_press(Message::StartEdit(defeito.id))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::secondary)
            .into()
    };

    container(
        row![
            cell(id, COLUMNS[0].1),
            cell(origem, COLUMNS[1].1),
            cell(erro, COLUMNS[2].1),
            cell(evidencias, COLUMNS[3].1),
            cell(severidade, COLUMNS[4].1),
            cell(status, COLUMNS[5].1),
            cell(registado, COLUMNS[6].1),
            cell(acoes, COLUMNS[7].1),
        ]
        .spacing(spacing::SM),
    )
    .padding(spacing::XS)
    .into()
}
