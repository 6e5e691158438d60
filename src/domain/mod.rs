// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`GalleryEntry`](gallery::GalleryEntry),
//!   [`LayoutMode`](gallery::LayoutMode))
//! - [`scroll`]: Scroll types ([`Easing`](scroll::Easing),
//!   [`WheelDelta`](scroll::WheelDelta), [`ScrollSensitivity`](scroll::ScrollSensitivity))

pub mod gallery;
pub mod scroll;
