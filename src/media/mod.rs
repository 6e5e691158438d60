// SPDX-License-Identifier: MPL-2.0
//! Image payloads shown in the gallery strip.
//!
//! Remote images arrive as encoded bytes and are handed to iced as-is; this
//! module only owns the in-memory placeholder shown until they decode.

pub mod placeholder;

pub use placeholder::{pixel_gif, placeholder_handle, PLACEHOLDER_RGB};
