// SPDX-License-Identifier: MPL-2.0
//! Domain layer - records exchanged with the QA API and the rules that
//! interpret them.
//!
//! Types here only depend on `serde` for the wire format; they know nothing
//! about HTTP or the UI, which keeps them trivially testable.
//!
//! # Modules
//!
//! - [`projeto`]: projects and their reference lists ([`Projeto`](projeto::Projeto),
//!   [`Modulo`](projeto::Modulo), [`Usuario`](projeto::Usuario))
//! - [`defeito`]: defects ([`Defeito`](defeito::Defeito), [`Severidade`](defeito::Severidade),
//!   [`DefeitoStatus`](defeito::DefeitoStatus))
//! - [`evidencias`]: normalization of the loosely-typed evidence field
//! - [`lookup`]: client-side joins against already-loaded reference lists
//! - [`newtypes`]: bounded configuration values

pub mod defeito;
pub mod evidencias;
pub mod lookup;
pub mod newtypes;
pub mod projeto;
