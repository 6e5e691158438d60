// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the image strip and its loading states.
//!
//! - [`component`]: state, messages and update logic
//! - [`strip`]: desktop (horizontal) and mobile (vertical) strip views
//! - [`empty_state`]: loading, empty and failed placeholders

pub mod component;
pub mod empty_state;
pub mod strip;

pub use component::{Effect, ImageSlot, LoadStatus, Message, State, STRIP_ID};
