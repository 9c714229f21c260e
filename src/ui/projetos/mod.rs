// SPDX-License-Identifier: MPL-2.0
//! Project administration screen.
//!
//! Lists projects with their module and responsible user, and edits them
//! through a single form that switches between create and update. The
//! screen never performs I/O itself: it emits [`Event`]s and the shell feeds
//! results back as [`Message`]s.

mod view;

pub use view::{view, ViewContext};

use crate::api::Catalog;
use crate::domain::lookup;
use crate::domain::projeto::{Modulo, Projeto, ProjetoPayload, ProjetoStatus, SaveRequest, Usuario};
use crate::error::{Error, ValidationError};
use crate::ui::components::alert::Alert;
use std::fmt;

/// Editable fields of the project form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjetoForm {
    pub nome: String,
    pub descricao: String,
    pub modulo_id: Option<i64>,
    pub responsavel_id: Option<i64>,
    pub status: ProjetoStatus,
}

impl ProjetoForm {
    /// Clears the fields a successful save resets; module and responsible
    /// user stay selected for the next entry.
    fn reset_after_save(&mut self) {
        self.nome.clear();
        self.descricao.clear();
        self.status = ProjetoStatus::Ativo;
    }

    fn fill_from(&mut self, projeto: &Projeto) {
        self.nome = projeto.nome.clone();
        self.descricao = projeto.descricao.clone().unwrap_or_default();
        self.modulo_id = Some(projeto.modulo_id);
        self.responsavel_id = projeto.responsavel_id;
        self.status = projeto.status.clone();
    }
}

/// Screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub projetos: Vec<Projeto>,
    pub modulos: Vec<Modulo>,
    pub usuarios: Vec<Usuario>,
    pub form: ProjetoForm,
    pub editing_id: Option<i64>,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Fetch projects, modules and users.
    Load,
    CatalogLoaded(Result<Catalog, Error>),
    NomeChanged(String),
    DescricaoChanged(String),
    ModuloSelected(ModuloChoice),
    ResponsavelSelected(ResponsavelChoice),
    StatusSelected(StatusChoice),
    Submit,
    Saved(Result<(), Error>),
    ProjetosRefreshed(Result<Vec<Projeto>, Error>),
    Edit(i64),
    CancelEdit,
}

impl Message {
    /// Whether the message comes from a widget rather than a finished request.
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::CatalogLoaded(_) | Self::Saved(_) | Self::ProjetosRefreshed(_)
        )
    }
}

/// Work the shell has to do on behalf of the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LoadCatalog,
    Save(SaveRequest),
    /// The save succeeded; notify the user and refresh the project list.
    Saved,
    Alert(Alert),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Load => {
                self.loading = true;
                Event::LoadCatalog
            }
            Message::CatalogLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(catalog) => {
                        self.apply_catalog(catalog);
                        Event::None
                    }
                    Err(err) => Event::Alert(Alert::with_reason("projetos-load-error", err.reason())),
                }
            }
            Message::NomeChanged(nome) => {
                self.form.nome = nome;
                Event::None
            }
            Message::DescricaoChanged(descricao) => {
                self.form.descricao = descricao;
                Event::None
            }
            Message::ModuloSelected(choice) => {
                self.form.modulo_id = Some(choice.id);
                Event::None
            }
            Message::ResponsavelSelected(choice) => {
                self.form.responsavel_id = choice.id;
                Event::None
            }
            Message::StatusSelected(choice) => {
                self.form.status = choice.status;
                Event::None
            }
            Message::Submit => match self.save_request() {
                Ok(request) => Event::Save(request),
                Err(err) => Event::Alert(Alert::new(err.i18n_key())),
            },
            Message::Saved(Ok(())) => {
                self.editing_id = None;
                self.form.reset_after_save();
                Event::Saved
            }
            Message::Saved(Err(err)) => {
                Event::Alert(Alert::with_reason("projetos-save-error", err.reason()))
            }
            Message::ProjetosRefreshed(Ok(projetos)) => {
                self.projetos = projetos;
                Event::None
            }
            Message::ProjetosRefreshed(Err(err)) => {
                Event::Alert(Alert::with_reason("projetos-load-error", err.reason()))
            }
            Message::Edit(id) => {
                if let Some(projeto) = self.projetos.iter().find(|p| p.id == id) {
                    self.form.fill_from(projeto);
                    self.editing_id = Some(id);
                }
                Event::None
            }
            Message::CancelEdit => {
                self.editing_id = None;
                self.form.nome.clear();
                self.form.descricao.clear();
                Event::None
            }
        }
    }

    /// Replaces every list at once.
    ///
    /// The first module is preselected only when the form has no module or
    /// its module is gone, so a reload never moves the record being edited.
    fn apply_catalog(&mut self, catalog: Catalog) {
        let Catalog {
            projetos,
            modulos,
            usuarios,
        } = catalog;
        self.projetos = projetos;
        self.modulos = modulos;
        self.usuarios = usuarios;

        let still_listed = self
            .form
            .modulo_id
            .is_some_and(|id| self.modulos.iter().any(|modulo| modulo.id == id));
        if !still_listed {
            self.form.modulo_id = self.modulos.first().map(|first| first.id);
        }
    }

    /// Builds the create/update request for the current form.
    pub fn save_request(&self) -> Result<SaveRequest, ValidationError> {
        let modulo_id = self.form.modulo_id.ok_or(ValidationError::MissingModulo)?;
        let payload = ProjetoPayload {
            nome: self.form.nome.clone(),
            descricao: self.form.descricao.clone(),
            modulo_id,
            sistema_id: lookup::sistema_of(modulo_id, &self.modulos),
            responsavel_id: self.form.responsavel_id.filter(|id| *id != 0),
            status: self.form.status.clone(),
        };
        Ok(match self.editing_id {
            Some(id) => SaveRequest::Update { id, payload },
            None => SaveRequest::Create(payload),
        })
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    // -------------------------------------------------------------------------
    // Dropdown choices
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn modulo_choices(&self) -> Vec<ModuloChoice> {
        self.modulos.iter().map(ModuloChoice::from).collect()
    }

    #[must_use]
    pub fn selected_modulo(&self) -> Option<ModuloChoice> {
        let id = self.form.modulo_id?;
        self.modulos
            .iter()
            .find(|modulo| modulo.id == id)
            .map(ModuloChoice::from)
    }

    /// "No responsible" followed by the active users only.
    #[must_use]
    pub fn responsavel_choices(&self, none_label: &str) -> Vec<ResponsavelChoice> {
        std::iter::once(ResponsavelChoice::none(none_label))
            .chain(
                self.usuarios
                    .iter()
                    .filter(|usuario| usuario.is_active())
                    .map(|usuario| ResponsavelChoice {
                        id: Some(usuario.id),
                        label: usuario.nome.clone(),
                    }),
            )
            .collect()
    }

    /// The current responsible user, even when inactive or unknown.
    ///
    /// `label_for` renders users that are not offered as choices.
    #[must_use]
    pub fn selected_responsavel(
        &self,
        none_label: &str,
        label_for: impl Fn(lookup::ResponsavelRef<'_>) -> String,
    ) -> ResponsavelChoice {
        match self.form.responsavel_id.filter(|id| *id != 0) {
            None => ResponsavelChoice::none(none_label),
            Some(id) => {
                let reference = lookup::ResponsavelRef::by_id(Some(id), &self.usuarios);
                let label = match reference {
                    lookup::ResponsavelRef::Active(nome) => nome.to_string(),
                    other => label_for(other),
                };
                ResponsavelChoice {
                    id: Some(id),
                    label,
                }
            }
        }
    }
}

// =============================================================================
// Choice types for pick lists
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuloChoice {
    pub id: i64,
    pub nome: String,
}

impl From<&Modulo> for ModuloChoice {
    fn from(modulo: &Modulo) -> Self {
        Self {
            id: modulo.id,
            nome: modulo.nome.clone(),
        }
    }
}

impl fmt::Display for ModuloChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nome)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsavelChoice {
    pub id: Option<i64>,
    pub label: String,
}

impl ResponsavelChoice {
    fn none(label: &str) -> Self {
        Self {
            id: None,
            label: label.to_string(),
        }
    }
}

impl fmt::Display for ResponsavelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChoice {
    pub status: ProjetoStatus,
    pub label: String,
}

impl fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            projetos: vec![Projeto {
                id: 10,
                nome: "Portal".into(),
                descricao: Some("Portal do cliente".into()),
                modulo_id: 2,
                responsavel_id: Some(5),
                status: ProjetoStatus::Pausado,
            }],
            modulos: vec![
                Modulo {
                    id: 1,
                    nome: "Vendas".into(),
                    sistema_id: Some(3),
                },
                Modulo {
                    id: 2,
                    nome: "Estoque".into(),
                    sistema_id: None,
                },
            ],
            usuarios: vec![
                Usuario {
                    id: 4,
                    nome: "Ana".into(),
                    ativo: Some(true),
                },
                Usuario {
                    id: 5,
                    nome: "Bruno".into(),
                    ativo: Some(false),
                },
            ],
        }
    }

    fn loaded() -> State {
        let mut state = State::new();
        state.update(Message::CatalogLoaded(Ok(catalog())));
        state
    }

    #[test]
    fn load_sets_loading_and_requests_catalog() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Load), Event::LoadCatalog);
        assert!(state.loading);
    }

    #[test]
    fn catalog_preselects_first_module() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.form.modulo_id, Some(1));
        assert_eq!(state.projetos.len(), 1);
    }

    #[test]
    fn failed_load_keeps_previous_lists() {
        let mut state = loaded();
        let event = state.update(Message::CatalogLoaded(Err(Error::Network("refused".into()))));

        assert!(matches!(event, Event::Alert(ref alert) if alert.key() == "projetos-load-error"));
        assert_eq!(state.projetos, catalog().projetos);
        assert_eq!(state.modulos, catalog().modulos);
        assert_eq!(state.usuarios, catalog().usuarios);
    }

    #[test]
    fn submit_without_module_alerts_and_sends_nothing() {
        let mut state = State::new();
        state.update(Message::NomeChanged("Novo".into()));
        let event = state.update(Message::Submit);
        assert_eq!(event, Event::Alert(Alert::new("projetos-select-modulo")));
    }

    #[test]
    fn submit_creates_with_derived_sistema() {
        let mut state = loaded();
        state.update(Message::NomeChanged("Checkout".into()));
        state.update(Message::ResponsavelSelected(ResponsavelChoice {
            id: Some(4),
            label: "Ana".into(),
        }));

        let Event::Save(SaveRequest::Create(payload)) = state.update(Message::Submit) else {
            panic!("expected a create request");
        };
        assert_eq!(payload.modulo_id, 1);
        assert_eq!(payload.sistema_id, Some(3));
        assert_eq!(payload.responsavel_id, Some(4));
        assert_eq!(payload.status, ProjetoStatus::Ativo);
    }

    #[test]
    fn edit_then_submit_updates() {
        let mut state = loaded();
        state.update(Message::Edit(10));
        assert_eq!(state.editing_id, Some(10));
        assert_eq!(state.form.nome, "Portal");
        assert_eq!(state.form.descricao, "Portal do cliente");
        assert_eq!(state.form.status, ProjetoStatus::Pausado);

        match state.update(Message::Submit) {
            Event::Save(SaveRequest::Update { id, payload }) => {
                assert_eq!(id, 10);
                assert_eq!(payload.modulo_id, 2);
                assert_eq!(payload.sistema_id, None);
                assert_eq!(payload.responsavel_id, Some(5));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn successful_save_resets_form_and_requests_refresh() {
        let mut state = loaded();
        state.update(Message::Edit(10));
        assert_eq!(state.update(Message::Saved(Ok(()))), Event::Saved);

        assert_eq!(state.editing_id, None);
        assert!(state.form.nome.is_empty());
        assert!(state.form.descricao.is_empty());
        assert_eq!(state.form.status, ProjetoStatus::Ativo);
    }

    #[test]
    fn failed_save_keeps_edit_target() {
        let mut state = loaded();
        state.update(Message::Edit(10));
        let event = state.update(Message::Saved(Err(Error::Status {
            status: 400,
            detail: "Nome duplicado".into(),
        })));

        assert_eq!(
            event,
            Event::Alert(Alert::with_reason("projetos-save-error", "Nome duplicado"))
        );
        assert_eq!(state.editing_id, Some(10));
        assert_eq!(state.projetos.len(), 1);
    }

    #[test]
    fn cancel_edit_clears_target_name_and_description() {
        let mut state = loaded();
        state.update(Message::Edit(10));
        state.update(Message::CancelEdit);
        assert_eq!(state.editing_id, None);
        assert!(state.form.nome.is_empty());
        assert!(state.form.descricao.is_empty());
        assert_eq!(state.form.modulo_id, Some(2));
    }

    #[test]
    fn reload_during_edit_keeps_the_record_module() {
        let mut state = loaded();
        state.update(Message::Edit(10));
        assert_eq!(state.update(Message::Load), Event::LoadCatalog);
        state.update(Message::CatalogLoaded(Ok(catalog())));

        assert_eq!(state.editing_id, Some(10));
        assert_eq!(state.form.modulo_id, Some(2));
        match state.update(Message::Submit) {
            Event::Save(SaveRequest::Update { id, payload }) => {
                assert_eq!(id, 10);
                assert_eq!(payload.modulo_id, 2);
                assert_eq!(payload.sistema_id, None);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn reload_without_the_selected_module_falls_back_to_first() {
        let mut state = loaded();
        state.update(Message::ModuloSelected(ModuloChoice {
            id: 2,
            nome: "Estoque".into(),
        }));
        let mut shrunk = catalog();
        shrunk.modulos.retain(|modulo| modulo.id != 2);
        state.update(Message::CatalogLoaded(Ok(shrunk)));
        assert_eq!(state.form.modulo_id, Some(1));

        let mut empty = catalog();
        empty.modulos.clear();
        state.update(Message::CatalogLoaded(Ok(empty)));
        assert_eq!(state.form.modulo_id, None);
    }

    #[test]
    fn name_is_sent_as_typed() {
        let mut state = loaded();
        state.update(Message::NomeChanged(" Checkout ".into()));
        let Event::Save(SaveRequest::Create(payload)) = state.update(Message::Submit) else {
            panic!("expected a create request");
        };
        assert_eq!(payload.nome, " Checkout ");
    }

    #[test]
    fn refresh_replaces_project_list() {
        let mut state = loaded();
        state.update(Message::ProjetosRefreshed(Ok(Vec::new())));
        assert!(state.projetos.is_empty());
    }

    #[test]
    fn responsavel_choices_offer_only_active_users() {
        let state = loaded();
        let labels: Vec<String> = state
            .responsavel_choices("Sem responsável")
            .into_iter()
            .map(|choice| choice.label)
            .collect();
        assert_eq!(labels, vec!["Sem responsável".to_string(), "Ana".to_string()]);
    }

    #[test]
    fn inactive_current_responsavel_is_still_selected() {
        let mut state = loaded();
        state.update(Message::Edit(10));
        let selected = state.selected_responsavel("Sem responsável", |_| "Bruno (Inativo)".into());
        assert_eq!(selected.id, Some(5));
        assert_eq!(selected.label, "Bruno (Inativo)");
    }
}
