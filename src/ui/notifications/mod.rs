// SPDX-License-Identifier: MPL-2.0
//! Dismissible banners shown above the browser.
//!
//! Used for problems the user should know about but that do not stop the
//! dashboard: an unreadable settings file, a link that could not be opened.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` holding what is on screen
//! - [`banner`] - Rendering

pub mod banner;
mod manager;
mod notification;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
