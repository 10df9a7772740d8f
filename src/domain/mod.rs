// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`FetchError`](error::FetchError))
//! - [`video`]: Catalog types ([`VideoRecord`](video::VideoRecord),
//!   [`PageResult`](video::PageResult), [`VideoQuery`](video::VideoQuery),
//!   [`SortOrder`](video::SortOrder), [`PageNumber`](video::PageNumber))

pub mod error;
pub mod video;
