// SPDX-License-Identifier: MPL-2.0
//! Keeps the notifications currently shown above the browser.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of banners stacked at once. Older ones drop off.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a banner.
    Dismiss(NotificationId),
}

/// Visible notifications, newest first.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`.
    ///
    /// A notification whose message is already on screen is not repeated;
    /// the existing banner moves to the top instead.
    pub fn push(&mut self, notification: Notification) {
        self.visible
            .retain(|shown| shown.message_key() != notification.message_key());
        self.visible.push_front(notification);
        self.visible.truncate(MAX_VISIBLE);
    }

    /// Removes a notification. Returns `true` if it was visible.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.visible.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }
}
