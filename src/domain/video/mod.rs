// SPDX-License-Identifier: MPL-2.0
//! Video catalog domain types.
//!
//! This module contains the value objects exchanged between the browser UI
//! and the catalog backend, independent of any presentation or
//! infrastructure concerns.

pub mod page;
pub mod query;
pub mod record;

// Re-export commonly used types
pub use crate::domain::error::FetchError;
pub use page::{total_pages, PageResult};
pub use query::{PageNumber, SortOrder, VideoQuery, PAGE_SIZE};
pub use record::VideoRecord;
