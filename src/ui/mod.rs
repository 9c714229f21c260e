// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns a `State`, handles its own `Message`s, and reports work for the shell
//! through an `Event`.
//!
//! # Screens
//!
//! - [`projetos`] - Project list and create/edit form
//! - [`defeitos`] - Defect list, inline status editing, and evidence gallery
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (badges, alert dialog)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with one tab per screen
//! - [`notifications`] - Snackbar for transient user feedback

pub mod components;
pub mod defeitos;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod projetos;
pub mod styles;
pub mod theming;
