// SPDX-License-Identifier: MPL-2.0
//! Paginated, searchable, sortable video list.
//!
//! [`component`] owns the state and orchestrates the sub-components; the
//! remaining modules render one part of the screen each.

pub mod component;
pub mod pagination;
pub mod status;
pub mod subcomponents;
pub mod toolbar;
pub mod video_card;

pub use component::{Effect, Message, State, ViewEnv};
