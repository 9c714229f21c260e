// SPDX-License-Identifier: MPL-2.0
//! Defect management screen.
//!
//! Lists defects with their origin, severity and status, edits the status
//! of one row at a time and opens attached evidence in a gallery modal.

pub mod format;
mod gallery;
mod view;

pub use gallery::{Gallery, ImageSlot, Message as GalleryMessage};
pub use view::{view, ViewContext};

use crate::domain::defeito::{Defeito, DefeitoStatus};
use crate::error::Error;
use crate::ui::components::alert::Alert;
use std::fmt;

/// Screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub defeitos: Vec<Defeito>,
    pub loading: bool,
    /// Row whose status selector is open.
    pub editing_id: Option<i64>,
    pub status_form: DefeitoStatus,
    pub gallery: Option<Gallery>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Load,
    Loaded(Result<Vec<Defeito>, Error>),
    StartEdit(i64),
    StatusSelected(StatusChoice),
    CancelEdit,
    SaveStatus(i64),
    StatusUpdated(Result<(), Error>),
    OpenGallery(i64),
    Gallery(GalleryMessage),
}

impl Message {
    /// Whether the message comes from a widget rather than a finished request.
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::Loaded(_)
                | Self::StatusUpdated(_)
                | Self::Gallery(GalleryMessage::ImageFetched { .. })
        )
    }
}

/// Work the shell has to do on behalf of the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Load,
    UpdateStatus { id: i64, status: DefeitoStatus },
    /// The update succeeded; notify the user and reload.
    StatusUpdated,
    /// Download the images of the gallery that was just opened.
    FetchEvidencias(Vec<String>),
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
                Event::Load
            }
            Message::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(defeitos) => {
                        self.defeitos = defeitos;
                        Event::None
                    }
                    Err(_) => Event::Alert(Alert::new("defeitos-load-error")),
                }
            }
            Message::StartEdit(id) => {
                if let Some(defeito) = self.defeitos.iter().find(|d| d.id == id) {
                    self.status_form = defeito.status.clone();
                    self.editing_id = Some(id);
                }
                Event::None
            }
            Message::StatusSelected(choice) => {
                self.status_form = choice.status;
                Event::None
            }
            Message::CancelEdit => {
                self.editing_id = None;
                Event::None
            }
            Message::SaveStatus(id) => Event::UpdateStatus {
                id,
                status: self.status_form.clone(),
            },
            Message::StatusUpdated(Ok(())) => {
                self.editing_id = None;
                Event::StatusUpdated
            }
            Message::StatusUpdated(Err(_)) => Event::Alert(Alert::new("defeitos-status-error")),
            Message::OpenGallery(id) => {
                let urls = self
                    .defeitos
                    .iter()
                    .find(|d| d.id == id)
                    .map(|d| d.evidencias().into_urls())
                    .unwrap_or_default();
                match Gallery::open(urls) {
                    Some(gallery) => {
                        let urls = gallery.urls();
                        self.gallery = Some(gallery);
                        Event::FetchEvidencias(urls)
                    }
                    None => Event::None,
                }
            }
            Message::Gallery(message) => {
                if let Some(gallery) = self.gallery.as_mut() {
                    if gallery.update(message) == gallery::Outcome::Close {
                        self.gallery = None;
                    }
                }
                Event::None
            }
        }
    }

    #[must_use]
    pub fn is_editing(&self, id: i64) -> bool {
        self.editing_id == Some(id)
    }
}

/// Entry of the inline status selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChoice {
    pub status: DefeitoStatus,
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
    use crate::domain::evidencias::RawEvidencias;

    fn defeito(id: i64, status: DefeitoStatus, evidencias: Option<&str>) -> Defeito {
        Defeito {
            id,
            titulo: format!("Defeito {id}"),
            descricao: None,
            evidencias: evidencias.map(|raw| RawEvidencias::Text(raw.to_string())),
            severidade: Default::default(),
            status,
            created_at: None,
            execucao: None,
        }
    }

    fn loaded() -> State {
        let mut state = State::new();
        state.update(Message::Loaded(Ok(vec![
            defeito(1, DefeitoStatus::Aberto, Some(r#"["http://x/a.png","http://x/b.png"]"#)),
            defeito(2, DefeitoStatus::Corrigido, None),
        ])));
        state
    }

    #[test]
    fn load_toggles_loading_flag() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Load), Event::Load);
        assert!(state.loading);
        state.update(Message::Loaded(Ok(Vec::new())));
        assert!(!state.loading);
    }

    #[test]
    fn failed_load_alerts_and_keeps_list() {
        let mut state = loaded();
        state.update(Message::Load);
        let event = state.update(Message::Loaded(Err(Error::Network("timeout".into()))));
        assert_eq!(event, Event::Alert(Alert::new("defeitos-load-error")));
        assert_eq!(state.defeitos.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn start_edit_seeds_selector_with_row_status() {
        let mut state = loaded();
        state.update(Message::StartEdit(2));
        assert!(state.is_editing(2));
        assert_eq!(state.status_form, DefeitoStatus::Corrigido);
    }

    #[test]
    fn save_sends_selected_status() {
        let mut state = loaded();
        state.update(Message::StartEdit(1));
        state.update(Message::StatusSelected(StatusChoice {
            status: DefeitoStatus::EmTeste,
            label: "Em Teste".into(),
        }));
        assert_eq!(
            state.update(Message::SaveStatus(1)),
            Event::UpdateStatus {
                id: 1,
                status: DefeitoStatus::EmTeste
            }
        );
    }

    #[test]
    fn successful_update_clears_edit_target() {
        let mut state = loaded();
        state.update(Message::StartEdit(1));
        assert_eq!(state.update(Message::StatusUpdated(Ok(()))), Event::StatusUpdated);
        assert_eq!(state.editing_id, None);
    }

    #[test]
    fn failed_update_alerts() {
        let mut state = loaded();
        state.update(Message::StartEdit(1));
        let event = state.update(Message::StatusUpdated(Err(Error::Status {
            status: 422,
            detail: String::new(),
        })));
        assert_eq!(event, Event::Alert(Alert::new("defeitos-status-error")));
        assert!(state.is_editing(1));
    }

    #[test]
    fn gallery_opens_only_with_evidence() {
        let mut state = loaded();
        assert_eq!(state.update(Message::OpenGallery(2)), Event::None);
        assert!(state.gallery.is_none());

        let event = state.update(Message::OpenGallery(1));
        assert_eq!(
            event,
            Event::FetchEvidencias(vec!["http://x/a.png".into(), "http://x/b.png".into()])
        );
        assert!(state.gallery.is_some());
    }

    #[test]
    fn gallery_closes_from_backdrop_but_not_from_image() {
        let mut state = loaded();
        state.update(Message::OpenGallery(1));

        state.update(Message::Gallery(GalleryMessage::ImagePressed));
        assert!(state.gallery.is_some());

        state.update(Message::Gallery(GalleryMessage::BackdropPressed));
        assert!(state.gallery.is_none());
    }

    #[test]
    fn request_results_are_not_user_input() {
        assert!(Message::SaveStatus(1).is_user_input());
        assert!(Message::Gallery(GalleryMessage::ClosePressed).is_user_input());
        assert!(!Message::Loaded(Ok(Vec::new())).is_user_input());
        assert!(!Message::StatusUpdated(Ok(())).is_user_input());
        assert!(!Message::Gallery(GalleryMessage::ImageFetched {
            url: "http://x/a.png".into(),
            result: Ok(Vec::new()),
        })
        .is_user_input());
    }
}
