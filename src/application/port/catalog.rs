// SPDX-License-Identifier: MPL-2.0
//! Video catalog port definition.
//!
//! This module defines the [`VideoCatalog`] trait for reading pages of
//! videos from a backend. Infrastructure adapters (like the HTTP client)
//! implement this trait.
//!
//! # Design Notes
//!
//! - Methods are not `async` - they hand back a boxed, `'static` future that
//!   the UI wraps in an Iced `Task`
//! - Futures own their inputs so they can outlive the borrow of the catalog
//! - Uses domain types only (`VideoQuery`, `PageResult`, `FetchError`)

use crate::domain::error::FetchError;
use crate::domain::video::{PageResult, VideoQuery};
use futures_util::future::BoxFuture;

// =============================================================================
// VideoCatalog Trait
// =============================================================================

/// Port for reading the video catalog.
///
/// # Example
///
/// ```ignore
/// use video_dashboard::application::port::VideoCatalog;
/// use video_dashboard::domain::video::VideoQuery;
///
/// async fn first_page(catalog: &dyn VideoCatalog) -> usize {
///     match catalog.fetch_page(VideoQuery::default()).await {
///         Ok(page) => page.videos.len(),
///         Err(_) => 0,
///     }
/// }
/// ```
pub trait VideoCatalog: Send + Sync {
    /// Fetches one page of results for `query`.
    ///
    /// Unrecognized but well-formed response bodies resolve to an empty
    /// page rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if:
    /// - The server answers with a non-success status
    /// - The request cannot be sent or the body cannot be read
    /// - The body is not valid JSON
    fn fetch_page(&self, query: VideoQuery) -> BoxFuture<'static, Result<PageResult, FetchError>>;

    /// Downloads the raw bytes of a thumbnail image.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the image cannot be downloaded.
    fn fetch_thumbnail(&self, url: String) -> BoxFuture<'static, Result<Vec<u8>, FetchError>>;
}
