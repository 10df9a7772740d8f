// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache sub-component.
//!
//! Thumbnails are downloaded once and kept in a bounded LRU cache, so paging
//! back and forth does not hit the network again.

use crate::domain::error::FetchError;
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// Outcome of a thumbnail download.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Ready(image::Handle),
    Failed,
}

/// Downloaded thumbnails keyed by URL.
pub struct State {
    cache: LruCache<String, Thumbnail>,
    in_flight: HashSet<String>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("cached", &self.cache.len())
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}

/// Messages for the thumbnail sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A download finished.
    Downloaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
}

impl State {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            in_flight: HashSet::new(),
        }
    }

    /// Picks the URLs that still need downloading and marks them in flight.
    ///
    /// Cached URLs are promoted so the current page is evicted last.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing = Vec::new();
        for url in urls {
            if self.cache.get(url).is_some() || self.in_flight.contains(url) {
                continue;
            }
            self.in_flight.insert(url.to_string());
            missing.push(url.to_string());
        }
        missing
    }

    /// Handle a thumbnail message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Downloaded { url, result } => {
                self.in_flight.remove(&url);
                let entry = match result {
                    Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
                    Err(err) => {
                        tracing::debug!(%url, error = %err, "thumbnail download failed");
                        Thumbnail::Failed
                    }
                };
                self.cache.put(url, entry);
            }
        }
    }

    /// Cached thumbnail for `url`, without touching recency.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn is_loading(&self, url: &str) -> bool {
        self.in_flight.contains(url)
    }

    /// Number of cached outcomes, failures included.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
