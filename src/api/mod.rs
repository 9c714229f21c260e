// SPDX-License-Identifier: MPL-2.0
//! Typed access to the QA REST API.
//!
//! Every call returns [`crate::error::Result`]; failures are logged here and
//! reported to the user by the shell.

pub mod client;
pub mod defeitos;
pub mod projetos;

pub use client::ApiClient;
pub use projetos::Catalog;
