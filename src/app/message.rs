// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::browser;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    Notification(notifications::NotificationMessage),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VIDEO_DASHBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog base URL, overriding `[server] base_url`.
    pub server: Option<String>,
}
