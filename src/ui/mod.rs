// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - The image strip, horizontal on desktop and vertical on mobile
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Scroll remapping and tweens
//! - [`widgets`] - Custom Iced widgets (wheel capture)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Static navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
