// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed implementation of the [`VideoCatalog`] port.

use super::response::{self, ResponseShape};
use crate::application::port::VideoCatalog;
use crate::domain::error::FetchError;
use crate::domain::video::{PageResult, VideoQuery};
use futures_util::future::BoxFuture;
use futures_util::{FutureExt, StreamExt};
use std::time::Duration;

/// Path of the listing endpoint, relative to the server base URL.
const VIDEOS_PATH: &str = "/videos";

/// Largest thumbnail we are willing to buffer (2 MiB).
pub const MAX_THUMBNAIL_BYTES: usize = 2 * 1024 * 1024;

/// Catalog served over HTTP by the `/videos` endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    videos_url: String,
}

impl HttpCatalog {
    /// Creates a catalog for the server at `base_url`.
    ///
    /// `timeout` of `None` leaves request timing to the transport.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("VideoDashboard/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            videos_url: videos_url(base_url),
        })
    }

    /// Full URL of the listing endpoint.
    #[must_use]
    pub fn videos_url(&self) -> &str {
        &self.videos_url
    }
}

impl VideoCatalog for HttpCatalog {
    fn fetch_page(&self, query: VideoQuery) -> BoxFuture<'static, Result<PageResult, FetchError>> {
        let client = self.client.clone();
        let url = self.videos_url.clone();
        async move { fetch_page(&client, &url, &query).await }.boxed()
    }

    fn fetch_thumbnail(&self, url: String) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let client = self.client.clone();
        async move { download_capped(&client, &url, MAX_THUMBNAIL_BYTES).await }.boxed()
    }
}

/// Joins the base URL and the endpoint path without doubling slashes.
fn videos_url(base_url: &str) -> String {
    format!("{}{VIDEOS_PATH}", base_url.trim_end_matches('/'))
}

fn http_error(status: reqwest::StatusCode) -> FetchError {
    FetchError::Http {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    query: &VideoQuery,
) -> Result<PageResult, FetchError> {
    let params = query.to_params();
    tracing::debug!(url, ?params, "GET videos");

    let response = client
        .get(url)
        .query(&params[..])
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(http_error(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let (page, shape) = response::parse_page(&body)?;
    if shape == ResponseShape::Unrecognized {
        tracing::warn!(url, "unrecognized /videos response shape, showing no results");
    }
    Ok(page)
}

/// Downloads `url`, refusing bodies larger than `max_bytes`.
async fn download_capped(
    client: &reqwest::Client,
    url: &str,
    max_bytes: usize,
) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(http_error(response.status()));
    }

    // Sanity check: reject early when the server announces an oversized body
    if let Some(len) = response.content_length() {
        if len > max_bytes as u64 {
            return Err(FetchError::Transport(format!(
                "image too large ({len} bytes, limit {max_bytes})"
            )));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Transport(e.to_string()))?;
        if bytes.len() + chunk.len() > max_bytes {
            return Err(FetchError::Transport(format!(
                "image exceeds {max_bytes} bytes"
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_url_strips_trailing_slash() {
        assert_eq!(videos_url("http://localhost:8000/"), "http://localhost:8000/videos");
        assert_eq!(videos_url("http://localhost:8000"), "http://localhost:8000/videos");
        assert_eq!(videos_url("https://api.example/v1"), "https://api.example/v1/videos");
    }

    #[test]
    fn http_error_carries_canonical_reason() {
        let err = http_error(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Error: 404 Not Found");
    }

    #[test]
    fn catalog_builds_with_and_without_timeout() {
        let plain = HttpCatalog::new("http://localhost:8000", None).unwrap();
        assert_eq!(plain.videos_url(), "http://localhost:8000/videos");
        let timed = HttpCatalog::new("http://localhost:8000", Some(Duration::from_secs(5)));
        assert!(timed.is_ok());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Port 9 (discard) on localhost is essentially never listening
        let catalog = HttpCatalog::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let err = catalog.fetch_page(VideoQuery::default()).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
