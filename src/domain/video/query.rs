// SPDX-License-Identifier: MPL-2.0
//! Query parameters sent to the catalog.

use std::fmt;

/// Number of records requested per page.
pub const PAGE_SIZE: u32 = 10;

// =============================================================================
// SortOrder
// =============================================================================

/// Ordering of results by publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl SortOrder {
    /// All orders, in the order they are offered to the user.
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    /// Value of the `sort` query parameter.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Returns the i18n message key for the selector label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortOrder::Asc => "sort-published-asc",
            SortOrder::Desc => "sort-published-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page number, guaranteed to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number, raising 0 to 1.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Returns the raw page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// Previous page, kept within `1..=total_pages`.
    ///
    /// A page left beyond the end by a shrinking result set lands on the
    /// last page rather than one step back.
    #[must_use]
    pub fn previous_within(self, total_pages: u32) -> Self {
        Self::new(self.0.saturating_sub(1).min(total_pages))
    }

    /// Next page, never above `total_pages` (and never below 1).
    #[must_use]
    pub fn next_within(self, total_pages: u32) -> Self {
        Self::new(self.0.saturating_add(1).min(total_pages))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// VideoQuery
// =============================================================================

/// Everything the catalog needs to produce one page of results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoQuery {
    pub page: PageNumber,
    pub search: String,
    pub sort: SortOrder,
}

impl VideoQuery {
    /// Query string pairs in the order the endpoint documents them.
    #[must_use]
    pub fn to_params(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.value().to_string()),
            ("page_size", PAGE_SIZE.to_string()),
            ("search", self.search.clone()),
            ("sort", self.sort.as_param().to_string()),
        ]
    }
}
