// SPDX-License-Identifier: MPL-2.0
//! Rendering of the project screen.

use super::{Message, State, StatusChoice};
use crate::i18n::fluent::I18n;
use crate::domain::lookup::{self, ResponsavelRef};
use crate::domain::projeto::{Projeto, ProjetoStatus};
use crate::ui::components::badge;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input, Column, Container,
};
use iced::{alignment, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = column![form(&ctx), list(&ctx)]
        .spacing(spacing::LG)
        .padding(spacing::LG);

    scrollable(content).height(Length::Fill).into()
}

fn status_label(status: &ProjetoStatus, i18n: &I18n) -> String {
    match status {
        ProjetoStatus::Other(raw) => raw.clone(),
        known => i18n.tr(&format!("projeto-status-{}", known.as_str())),
    }
}

fn labeled<'a>(label: String, field: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    column![text(label).size(typography::CAPTION), field.into()].spacing(spacing::XXS)
}

fn form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title_key = if state.is_editing() {
        "projetos-title-edit"
    } else {
        "projetos-title-new"
    };

    let modulo = pick_list(
        state.modulo_choices(),
        state.selected_modulo(),
        Message::ModuloSelected,
    )
    .placeholder(i18n.tr("projetos-modulo-placeholder"))
    .width(Length::Fixed(sizing::INPUT_WIDTH));

    let none_label = i18n.tr("projetos-responsavel-none");
    let responsavel = pick_list(
        state.responsavel_choices(&none_label),
        Some(state.selected_responsavel(&none_label, |reference| {
            badge::responsavel_label(reference, i18n)
        })),
        Message::ResponsavelSelected,
    )
    .width(Length::Fixed(sizing::INPUT_WIDTH));

    let status_choices: Vec<StatusChoice> = ProjetoStatus::ALL
        .iter()
        .map(|status| StatusChoice {
            status: status.clone(),
            label: status_label(status, i18n),
        })
        .collect();
    let status = pick_list(
        status_choices,
        Some(StatusChoice {
            status: state.form.status.clone(),
            label: status_label(&state.form.status, i18n),
        }),
        Message::StatusSelected,
    )
    .width(Length::Fixed(sizing::INPUT_WIDTH));

    let nome = text_input(&i18n.tr("projetos-nome-placeholder"), &state.form.nome)
        .on_input(Message::NomeChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let descricao = text_input("", &state.form.descricao)
        .on_input(Message::DescricaoChanged)
        .padding(spacing::XS);

    let mut actions = row![button(text(i18n.tr("projetos-save-button")))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)]
    .spacing(spacing::SM);

    if state.is_editing() {
        actions = actions.push(
            button(text(i18n.tr("projetos-cancel-button")))
                .on_press(Message::CancelEdit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        );
    }

    let body = column![
        text(i18n.tr(title_key)).size(typography::TITLE_SM),
        row![
            labeled(i18n.tr("projetos-label-modulo"), modulo),
            labeled(i18n.tr("projetos-label-responsavel"), responsavel),
        ]
        .spacing(spacing::MD),
        labeled(i18n.tr("projetos-label-nome"), nome),
        labeled(i18n.tr("projetos-label-descricao"), descricao),
        labeled(i18n.tr("projetos-label-status"), status),
        actions,
    ]
    .spacing(spacing::MD);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

const COLUMNS: [(&str, u16); 5] = [
    ("projetos-col-nome", 3),
    ("projetos-col-modulo", 2),
    ("projetos-col-status", 2),
    ("projetos-col-responsavel", 2),
    ("projetos-col-acoes", 1),
];

fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = COLUMNS.iter().fold(row![].spacing(spacing::SM), |row, (key, portion)| {
        row.push(cell(text(i18n.tr(key)).size(typography::CAPTION), *portion))
    });

    let rows = state.projetos.iter().fold(
        Column::new().spacing(spacing::XS),
        |rows, projeto| rows.push(project_row(projeto, ctx)),
    );

    let body = column![
        text(i18n.tr("projetos-list-title")).size(typography::TITLE_SM),
        container(header)
            .padding(spacing::XS)
            .style(styles::container::header_row),
        rows,
    ]
    .spacing(spacing::SM);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn project_row<'a>(projeto: &'a Projeto, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let nome = text(projeto.nome.as_str()).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });
    let modulo = text(
        lookup::modulo_nome(projeto.modulo_id, &state.modulos)
            .unwrap_or("-")
            .to_string(),
    );
    let responsavel = badge::responsavel::<Message>(
        ResponsavelRef::by_id(projeto.responsavel_id, &state.usuarios),
        i18n,
    );
    let edit = button(text(i18n.tr("projetos-edit-button")))
        .on_press(Message::Edit(projeto.id))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    container(
        row![
            cell(nome, COLUMNS[0].1),
            cell(modulo, COLUMNS[1].1),
            cell(badge::projeto_status::<Message>(&projeto.status), COLUMNS[2].1),
            cell(responsavel, COLUMNS[3].1),
            cell(edit, COLUMNS[4].1),
        ]
        .spacing(spacing::SM),
    )
    .padding(spacing::XS)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn status_labels_are_translated() {
        let i18n = I18n::new(Some("pt-BR".to_string()), &Config::default());
        assert_eq!(status_label(&ProjetoStatus::Pausado, &i18n), "Pausado");
        assert_eq!(
            status_label(&ProjetoStatus::Other("arquivado".into()), &i18n),
            "arquivado"
        );
    }

    #[test]
    fn view_renders_empty_and_editing_states() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        state.editing_id = Some(1);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
