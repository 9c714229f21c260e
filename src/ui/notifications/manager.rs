// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle management.
//!
//! The `Snackbar` holds a single notification. Publishing replaces whatever
//! is shown and restarts the countdown; a periodic tick hides it once the
//! deadline passes.

use super::notification::{Notification, Severity};
use crate::domain::newtypes::DismissDelay;
use std::time::Instant;

/// Messages for snackbar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic check of the dismissal deadline.
    Tick(Instant),
}

/// The single pending dismissal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    pub fn arm(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

/// Application-wide notification holder, owned by the shell.
#[derive(Debug, Default)]
pub struct Snackbar {
    current: Notification,
    visible: bool,
    timer: DismissTimer,
    delay: DismissDelay,
}

impl Snackbar {
    /// Creates a hidden snackbar with the default dismissal delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delay(delay: DismissDelay) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Shows `message`, replacing the current one, and restarts the countdown
    /// from `now`.
    pub fn publish_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.timer.disarm();
        self.current = Notification::new(severity, message);
        self.visible = true;
        self.timer.arm(now + self.delay.as_duration());
    }

    pub fn publish(&mut self, message: impl Into<String>, severity: Severity) {
        self.publish_at(message, severity, Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.publish(message, Severity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.publish(message, Severity::Error);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.publish(message, Severity::Warning);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.publish(message, Severity::Info);
    }

    /// Hides the snackbar once its deadline has passed.
    ///
    /// The last message and severity are kept.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.is_expired(now) {
            self.timer.disarm();
            self.visible = false;
        }
    }

    /// Handles a snackbar message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Cancels the pending dismissal and hides. Called on shutdown.
    pub fn teardown(&mut self) {
        self.timer.disarm();
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn current(&self) -> &Notification {
        &self.current
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    #[must_use]
    pub fn delay(&self) -> DismissDelay {
        self.delay
    }
}
