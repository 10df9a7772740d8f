// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP stack and the operating system.
//!
//! # Available Adapters
//!
//! - [`http`]: Video catalog over HTTP (implements [`VideoCatalog`])
//! - [`browser`]: Opening links in the user's default web browser
//!
//! [`VideoCatalog`]: crate::application::port::VideoCatalog

pub mod browser;
pub mod http;

// Re-export main types for convenience
pub use http::{HttpCatalog, MAX_THUMBNAIL_BYTES};
