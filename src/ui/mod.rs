// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`browser`] - The video browser screen and its sub-components
//! - [`notifications`] - Dismissible warning and error banners
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod browser;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
