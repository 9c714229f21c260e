// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

pub use crate::domain::newtypes::dismiss_bounds::{
    DEFAULT_MS as DEFAULT_DISMISS_MS, MAX_MS as MAX_DISMISS_MS, MIN_MS as MIN_DISMISS_MS,
};
pub use crate::domain::newtypes::timeout_bounds::{
    DEFAULT_SECS as DEFAULT_TIMEOUT_SECS, MAX_SECS as MAX_TIMEOUT_SECS,
    MIN_SECS as MIN_TIMEOUT_SECS,
};

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of a locally running QA API (`API_V1_STR` prefix included).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "QA_CONSOLE_API_URL";

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS picks one.
pub const DEFAULT_LOCALE: &str = "pt-BR";
