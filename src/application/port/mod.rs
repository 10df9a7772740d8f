// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Reading pages of videos and their thumbnails
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so they can be shared with background tasks
//! - Methods return boxed futures - use Iced's `Task::perform` in callers

pub mod catalog;

// Re-export main types for convenience
pub use catalog::VideoCatalog;
