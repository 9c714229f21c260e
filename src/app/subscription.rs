// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::SnackbarMessage;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval at which a visible snackbar checks its deadline.
pub const SNACKBAR_TICK: Duration = Duration::from_millis(100);

/// Routes window close requests so the shell can tear down before exiting.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Ticks the snackbar only while it is on screen.
pub fn create_tick_subscription(snackbar_visible: bool) -> Subscription<Message> {
    if snackbar_visible {
        time::every(SNACKBAR_TICK).map(|now| Message::Snackbar(SnackbarMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
