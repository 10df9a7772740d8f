// SPDX-License-Identifier: MPL-2.0
//! One page of catalog results.

use super::query::PAGE_SIZE;
use super::record::VideoRecord;

/// Records for the current page plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub videos: Vec<VideoRecord>,
    /// Total number of matching records across all pages.
    ///
    /// Only used to compute the page count. When the server omits it, this
    /// is the length of `videos`, which undercounts on paginated servers.
    pub total: u64,
}

impl PageResult {
    #[must_use]
    pub fn new(videos: Vec<VideoRecord>, total: u64) -> Self {
        Self { videos, total }
    }

    /// Empty result (no records, total 0).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Number of pages implied by `total`.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total)
    }
}

/// `ceil(total / PAGE_SIZE)`, saturating at `u32::MAX`.
#[must_use]
pub fn total_pages(total: u64) -> u32 {
    let pages = total.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
