// SPDX-License-Identifier: MPL-2.0
//! Projects and the reference lists they are joined against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project.
///
/// Unknown wire values are kept verbatim in [`ProjetoStatus::Other`] so a
/// newer server never breaks list decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjetoStatus {
    #[default]
    Ativo,
    Pausado,
    Finalizado,
    Other(String),
}

impl ProjetoStatus {
    /// Statuses offered by the project form.
    pub const ALL: [ProjetoStatus; 3] = [
        ProjetoStatus::Ativo,
        ProjetoStatus::Pausado,
        ProjetoStatus::Finalizado,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ProjetoStatus::Ativo => "ativo",
            ProjetoStatus::Pausado => "pausado",
            ProjetoStatus::Finalizado => "finalizado",
            ProjetoStatus::Other(raw) => raw,
        }
    }

    /// Whether the list badge uses the "on" style.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, ProjetoStatus::Ativo)
    }
}

impl From<String> for ProjetoStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ativo" => ProjetoStatus::Ativo,
            "pausado" => ProjetoStatus::Pausado,
            "finalizado" => ProjetoStatus::Finalizado,
            _ => ProjetoStatus::Other(raw),
        }
    }
}

impl From<ProjetoStatus> for String {
    fn from(status: ProjetoStatus) -> Self {
        match status {
            ProjetoStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjetoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project as returned by `GET /projetos/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Projeto {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub modulo_id: i64,
    #[serde(default)]
    pub responsavel_id: Option<i64>,
    #[serde(default)]
    pub status: ProjetoStatus,
}

/// Organizational grouping that owns projects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Modulo {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub sistema_id: Option<i64>,
}

/// A user that may be assigned as a project lead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    /// The API omits the flag for some legacy accounts.
    #[serde(default)]
    pub ativo: Option<bool>,
}

impl Usuario {
    /// Only users explicitly flagged active can be picked for new work.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.ativo == Some(true)
    }
}

/// Body of `POST /projetos/` and `PUT /projetos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjetoPayload {
    pub nome: String,
    pub descricao: String,
    pub modulo_id: i64,
    /// Derived from the selected module; the field is left out when the
    /// module carries no system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sistema_id: Option<i64>,
    pub responsavel_id: Option<i64>,
    pub status: ProjetoStatus,
}

/// Create or update, chosen by the presence of an edit target.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(ProjetoPayload),
    Update { id: i64, payload: ProjetoPayload },
}

impl SaveRequest {
    #[must_use]
    pub fn payload(&self) -> &ProjetoPayload {
        match self {
            SaveRequest::Create(payload) | SaveRequest::Update { payload, .. } => payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projeto_decodes_with_optional_fields_missing() {
        let json = r#"{"id": 3, "nome": "Login", "modulo_id": 7, "status": "pausado"}"#;
        let projeto: Projeto = serde_json::from_str(json).expect("decode");
        assert_eq!(projeto.descricao, None);
        assert_eq!(projeto.responsavel_id, None);
        assert_eq!(projeto.status, ProjetoStatus::Pausado);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: ProjetoStatus = serde_json::from_str(r#""arquivado""#).expect("decode");
        assert_eq!(status, ProjetoStatus::Other("arquivado".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""arquivado""#);
        assert!(!status.is_active());
    }

    #[test]
    fn payload_omits_missing_sistema_but_keeps_null_responsavel() {
        let payload = ProjetoPayload {
            nome: "Checkout".into(),
            descricao: String::new(),
            modulo_id: 2,
            sistema_id: None,
            responsavel_id: None,
            status: ProjetoStatus::Ativo,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("sistema_id").is_none());
        assert!(value["responsavel_id"].is_null());
        assert_eq!(value["modulo_id"], 2);
        assert_eq!(value["status"], "ativo");
    }

    #[test]
    fn usuario_without_flag_is_not_active() {
        let usuario: Usuario = serde_json::from_str(r#"{"id": 1, "nome": "Ana"}"#).unwrap();
        assert!(!usuario.is_active());
    }
}
