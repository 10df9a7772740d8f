// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the video browser.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── query      - Page, committed search and sort order
//!     ├── debounce   - Pending search input and its commit timer
//!     ├── fetch      - Request sequencing, loading/error flags, results
//!     └── thumbnails - Downloaded preview images
//! ```

pub mod debounce;
pub mod fetch;
pub mod query;
pub mod thumbnails;
