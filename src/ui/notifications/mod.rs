// SPDX-License-Identifier: MPL-2.0
//! Snackbar notification system for user feedback.
//!
//! One message at a time, replaced rather than queued, hidden automatically
//! after a configurable delay.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct and `Severity` levels
//! - [`manager`] - `Snackbar` holder with its dismissal timer
//! - [`toast`] - Overlay rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Snackbar, Toast};
//!
//! let mut snackbar = Snackbar::new();
//! snackbar.success(i18n.tr("projetos-saved"));
//!
//! // In the view, layer the overlay over the page.
//! if let Some(overlay) = Toast::view_overlay(&snackbar) {
//!     layers.push(overlay);
//! }
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{DismissTimer, Message as SnackbarMessage, Snackbar};
pub use notification::{Notification, Severity};
pub use toast::{card_width, message_style, Toast};
