// SPDX-License-Identifier: MPL-2.0
//! `qa_console` is an administrative console for a QA management REST API,
//! built with the Iced GUI framework.
//!
//! It manages projects and tracks the status of defects found during test
//! execution, with Fluent-based localization and a TOML configuration file.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
