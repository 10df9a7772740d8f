// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter implementing the [`VideoCatalog`] port trait.
//!
//! - [`HttpCatalog`]: `GET /videos` listing and thumbnail downloads
//! - [`response`]: shape-tolerant decoding of listing bodies
//!
//! [`VideoCatalog`]: crate::application::port::VideoCatalog

mod client;
pub mod response;

pub use client::{HttpCatalog, MAX_THUMBNAIL_BYTES};
pub use response::ResponseShape;
