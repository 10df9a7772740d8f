// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests.
//!
//! [`RecordingCatalog`] stands in for the HTTP catalog: it answers every
//! request immediately and remembers what was asked.

use crate::application::port::VideoCatalog;
use crate::domain::error::FetchError;
use crate::domain::video::{PageResult, VideoQuery, VideoRecord};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::Mutex;

/// Catalog double that records queries and thumbnail URLs.
#[derive(Debug, Default)]
pub struct RecordingCatalog {
    queries: Mutex<Vec<VideoQuery>>,
    thumbnails: Mutex<Vec<String>>,
}

impl RecordingCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<VideoQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Thumbnail URLs requested so far, oldest first.
    pub fn thumbnail_requests(&self) -> Vec<String> {
        self.thumbnails.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl VideoCatalog for RecordingCatalog {
    fn fetch_page(&self, query: VideoQuery) -> BoxFuture<'static, Result<PageResult, FetchError>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query);
        }
        async { Ok(PageResult::empty()) }.boxed()
    }

    fn fetch_thumbnail(&self, url: String) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        if let Ok(mut thumbnails) = self.thumbnails.lock() {
            thumbnails.push(url);
        }
        async { Ok(Vec::new()) }.boxed()
    }
}

/// Builds `count` records with ids `v0..`, each with a thumbnail URL.
#[must_use]
pub fn sample_records(count: usize) -> Vec<VideoRecord> {
    (0..count)
        .map(|i| VideoRecord {
            id: Some(format!("v{i}")),
            title: Some(format!("Video {i}")),
            description: None,
            published_at: Some("2024-01-15T12:00:00Z".to_string()),
            thumbnail_url: Some(format!("https://img.example/{i}.jpg")),
        })
        .collect()
}
