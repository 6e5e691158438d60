// SPDX-License-Identifier: MPL-2.0
//! Animation port definition.
//!
//! The scroll remapper does not care how motion is produced, only that a
//! value travels to a target over a duration along a curve. Any timer or
//! animation facility can back this trait; the app uses a frame-sampled
//! tween driven by Iced's time subscription.

use crate::domain::scroll::Easing;
use std::time::{Duration, Instant};

/// Port for a single retargetable scalar animation.
///
/// Calling [`animate`](Animator::animate) while a previous animation is
/// still running replaces it; implementations never queue.
pub trait Animator {
    /// Starts (or restarts) an animation from `from` to `target`.
    fn animate(&mut self, from: f32, target: f32, duration: Duration, easing: Easing, now: Instant);

    /// Returns the animated value while running, `None` once finished or idle.
    fn sample(&self, now: Instant) -> Option<f32>;

    /// Returns the value at `now`: the animated value while running,
    /// otherwise the last target reached.
    fn position(&self, now: Instant) -> f32;

    /// Returns `true` while an animation is in flight.
    fn is_running(&self, now: Instant) -> bool {
        self.sample(now).is_some()
    }

    /// Final value of the current (or last) animation.
    fn target(&self) -> f32;

    /// Stops the animation where it is.
    fn cancel(&mut self, now: Instant);
}
