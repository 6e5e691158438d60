// SPDX-License-Identifier: MPL-2.0
//! Scroll domain types: easing curves, wheel deltas and scroll newtypes.

pub mod easing;
pub mod newtypes;
pub mod wheel;

pub use easing::Easing;
pub use newtypes::{ScrollSensitivity, TweenDuration};
pub use wheel::{WheelDelta, PIXELS_PER_LINE};
