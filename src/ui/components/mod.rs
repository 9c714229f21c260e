// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`alert`] - Blocking acknowledgement dialog for failures
//! - [`badge`] - Colored pills for statuses, severities and responsible users

pub mod alert;
pub mod badge;
