// SPDX-License-Identifier: MPL-2.0
//! A single video as reported by the catalog.

/// Base of the canonical watch link.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Video entry with every field optional.
///
/// Backends disagree on the shape of a video, so the infrastructure layer
/// extracts whatever it finds and leaves the rest `None`. Fallback text is a
/// presentation concern and is chosen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Publication time as sent by the server (ISO-8601, not validated).
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl VideoRecord {
    /// Canonical watch URL, if the record has an identifier.
    #[must_use]
    pub fn watch_url(&self) -> Option<String> {
        self.id
            .as_deref()
            .map(|id| format!("{WATCH_URL_PREFIX}{id}"))
    }
}
