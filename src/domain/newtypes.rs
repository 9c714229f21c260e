// SPDX-License-Identifier: MPL-2.0
//! Bounded configuration values.
//!
//! Each newtype clamps on construction so persisted configs cannot request
//! nonsensical values.

use std::time::Duration;

/// Bounds for the snackbar dismissal delay, in milliseconds.
pub mod dismiss_bounds {
    pub const MIN_MS: u64 = 500;
    pub const MAX_MS: u64 = 60_000;
    pub const DEFAULT_MS: u64 = 4_000;
}

/// Bounds for the HTTP request timeout, in seconds.
pub mod timeout_bounds {
    pub const MIN_SECS: u64 = 1;
    pub const MAX_SECS: u64 = 300;
    pub const DEFAULT_SECS: u64 = 30;
}

/// How long a notification stays visible after it is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u64);

impl DismissDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(dismiss_bounds::MIN_MS, dismiss_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(dismiss_bounds::DEFAULT_MS)
    }
}

/// Upper bound on a single API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(u64);

impl RequestTimeout {
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self(secs.clamp(timeout_bounds::MIN_SECS, timeout_bounds::MAX_SECS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(timeout_bounds::DEFAULT_SECS)
    }
}
