// SPDX-License-Identifier: MPL-2.0
//! `video_dashboard` is a desktop browser for a paginated video catalog, built
//! with the Iced GUI framework.
//!
//! It lists videos served by an HTTP `/videos` endpoint with debounced search,
//! sorting by publication date and page navigation. Strings are localized with
//! Fluent and preferences live in a TOML settings file.
//!
//! # Layers
//!
//! - [`domain`] - Pure types (queries, records, fetch errors)
//! - [`application`] - Port traits the UI depends on
//! - [`infrastructure`] - HTTP catalog and system browser adapters
//! - [`ui`] - Iced widgets, styles and the browser component
//! - [`app`] - Application root wiring everything together

#![doc(html_root_url = "https://docs.rs/video_dashboard/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
