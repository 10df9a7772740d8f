// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to infrastructure only through these ports
//!
//! # Example
//!
//! ```ignore
//! use video_dashboard::application::port::VideoCatalog;
//! use video_dashboard::infrastructure::http::HttpCatalog;
//! use std::sync::Arc;
//!
//! let catalog: Arc<dyn VideoCatalog> =
//!     Arc::new(HttpCatalog::new(config.base_url(), config.request_timeout())?);
//! ```

pub mod port;
