// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the window close request and the paging shortcuts. Key presses
//! already captured by a widget (typing in the search box) are ignored.

use super::Message;
use crate::ui::browser;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match status {
            event::Status::Ignored => keyboard_shortcut(&event).map(Message::Browser),
            event::Status::Captured => None,
        }
    })
}

/// Maps PageUp / PageDown to pagination.
fn keyboard_shortcut(event: &Event) -> Option<browser::Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    match key {
        Key::Named(Named::PageUp) => Some(browser::Message::PreviousPage),
        Key::Named(Named::PageDown) => Some(browser::Message::NextPage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_keyboard_events_are_not_shortcuts() {
        let event = Event::Window(window::Event::Focused);
        assert!(keyboard_shortcut(&event).is_none());
    }
}
