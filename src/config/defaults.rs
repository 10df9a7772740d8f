// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Catalog endpoint location
//! - **Search**: Debounce timing for the search box
//! - **Thumbnails**: In-memory image cache size

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL of the catalog server (the `/videos` path is appended).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Quiet period after the last keystroke before a search is committed (ms).
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Minimum accepted debounce delay (ms).
pub const MIN_DEBOUNCE_MS: u64 = 50;

/// Maximum accepted debounce delay (ms).
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const THUMBNAIL_CACHE_CAPACITY: usize = 128;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DEBOUNCE_MS > 0);
    assert!(MAX_DEBOUNCE_MS >= MIN_DEBOUNCE_MS);
    assert!(DEFAULT_DEBOUNCE_MS >= MIN_DEBOUNCE_MS);
    assert!(DEFAULT_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);

    // A page of results must fit in the cache
    assert!(THUMBNAIL_CACHE_CAPACITY >= crate::domain::video::PAGE_SIZE as usize);
};
