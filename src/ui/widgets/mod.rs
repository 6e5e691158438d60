// SPDX-License-Identifier: MPL-2.0
pub mod wheel_capture;

pub use wheel_capture::{wheel_capture, WheelCapture};
