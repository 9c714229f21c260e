// SPDX-License-Identifier: MPL-2.0
//! Client-side joins against reference lists that are already loaded.

use super::defeito::Responsavel;
use super::projeto::{Modulo, Usuario};

/// How a responsible-user reference resolves for display.
///
/// Every variant gets its own rendering so the four cases stay
/// distinguishable at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsavelRef<'a> {
    /// The record has no responsible user.
    Absent,
    /// The reference points at nobody we know.
    Unknown,
    /// The user exists but was deactivated.
    Inactive(&'a str),
    Active(&'a str),
}

impl<'a> ResponsavelRef<'a> {
    /// Resolves a project's `responsavel_id` against the user list.
    ///
    /// A user without an explicit `ativo: true` counts as inactive.
    #[must_use]
    pub fn by_id(id: Option<i64>, usuarios: &'a [Usuario]) -> Self {
        let Some(id) = id.filter(|id| *id != 0) else {
            return ResponsavelRef::Absent;
        };

        match usuarios.iter().find(|usuario| usuario.id == id) {
            None => ResponsavelRef::Unknown,
            Some(usuario) if usuario.is_active() => ResponsavelRef::Active(&usuario.nome),
            Some(usuario) => ResponsavelRef::Inactive(&usuario.nome),
        }
    }

    /// Resolves the responsible user embedded in a defect's execution.
    ///
    /// Only an explicit `ativo: false` marks the user inactive here.
    #[must_use]
    pub fn nested(responsavel: Option<&'a Responsavel>) -> Self {
        match responsavel {
            None => ResponsavelRef::Unknown,
            Some(r) if r.ativo == Some(false) => ResponsavelRef::Inactive(&r.nome),
            Some(r) => ResponsavelRef::Active(&r.nome),
        }
    }
}

/// Name of the module with the given id.
#[must_use]
pub fn modulo_nome(id: i64, modulos: &[Modulo]) -> Option<&str> {
    modulos
        .iter()
        .find(|modulo| modulo.id == id)
        .map(|modulo| modulo.nome.as_str())
}

/// System owning the module with the given id.
#[must_use]
pub fn sistema_of(modulo_id: i64, modulos: &[Modulo]) -> Option<i64> {
    modulos
        .iter()
        .find(|modulo| modulo.id == modulo_id)
        .and_then(|modulo| modulo.sistema_id)
}
