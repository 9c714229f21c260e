// SPDX-License-Identifier: MPL-2.0
//! Defects reported from test executions.

use super::evidencias::{Evidencias, RawEvidencias};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defect severity used for visual prioritization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severidade {
    Critico,
    Alto,
    Medio,
    Other(String),
}

impl Severidade {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severidade::Critico => "critico",
            Severidade::Alto => "alto",
            Severidade::Medio => "medio",
            Severidade::Other(raw) => raw,
        }
    }
}

impl Default for Severidade {
    fn default() -> Self {
        Severidade::Other(String::new())
    }
}

impl From<String> for Severidade {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "critico" => Severidade::Critico,
            "alto" => Severidade::Alto,
            "medio" => Severidade::Medio,
            _ => Severidade::Other(raw),
        }
    }
}

impl From<Severidade> for String {
    fn from(severidade: Severidade) -> Self {
        match severidade {
            Severidade::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Workflow status of a defect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DefeitoStatus {
    #[default]
    Aberto,
    EmTeste,
    Corrigido,
    Fechado,
    Other(String),
}

impl DefeitoStatus {
    /// Statuses offered by the inline status editor, in workflow order.
    pub const ALL: [DefeitoStatus; 4] = [
        DefeitoStatus::Aberto,
        DefeitoStatus::EmTeste,
        DefeitoStatus::Corrigido,
        DefeitoStatus::Fechado,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            DefeitoStatus::Aberto => "aberto",
            DefeitoStatus::EmTeste => "em_teste",
            DefeitoStatus::Corrigido => "corrigido",
            DefeitoStatus::Fechado => "fechado",
            DefeitoStatus::Other(raw) => raw,
        }
    }

    /// Badge label: the raw value upper-cased.
    #[must_use]
    pub fn badge_label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<String> for DefeitoStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "aberto" => DefeitoStatus::Aberto,
            "em_teste" => DefeitoStatus::EmTeste,
            "corrigido" => DefeitoStatus::Corrigido,
            "fechado" => DefeitoStatus::Fechado,
            _ => DefeitoStatus::Other(raw),
        }
    }
}

impl From<DefeitoStatus> for String {
    fn from(status: DefeitoStatus) -> Self {
        match status {
            DefeitoStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DefeitoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CasoTeste {
    #[serde(default)]
    pub nome: Option<String>,
}

/// User responsible for the execution that raised the defect.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Responsavel {
    pub nome: String,
    #[serde(default)]
    pub ativo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Execucao {
    #[serde(default)]
    pub caso_teste: Option<CasoTeste>,
    #[serde(default)]
    pub responsavel: Option<Responsavel>,
}

/// A defect as returned by `GET /defeitos/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Defeito {
    pub id: i64,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub evidencias: Option<RawEvidencias>,
    #[serde(default)]
    pub severidade: Severidade,
    #[serde(default)]
    pub status: DefeitoStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub execucao: Option<Execucao>,
}

impl Defeito {
    /// Name of the test case that produced this defect, if it still exists.
    #[must_use]
    pub fn caso_teste_nome(&self) -> Option<&str> {
        self.execucao
            .as_ref()
            .and_then(|execucao| execucao.caso_teste.as_ref())
            .and_then(|caso| caso.nome.as_deref())
            .filter(|nome| !nome.is_empty())
    }

    #[must_use]
    pub fn responsavel(&self) -> Option<&Responsavel> {
        self.execucao
            .as_ref()
            .and_then(|execucao| execucao.responsavel.as_ref())
    }

    /// Normalized evidence attached to this defect.
    #[must_use]
    pub fn evidencias(&self) -> Evidencias {
        Evidencias::from_raw(self.evidencias.as_ref())
    }
}

/// Body of `PUT /defeitos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefeitoStatusPayload {
    pub status: DefeitoStatus,
}
