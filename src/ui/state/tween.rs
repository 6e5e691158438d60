// SPDX-License-Identifier: MPL-2.0
//! Frame-sampled tweens.
//!
//! [`ScrollTween`] is the [`Animator`] behind the scroll remapper. It holds no
//! timer of its own: the gallery samples it on every frame tick with the
//! current instant.

use crate::application::port::Animator;
use crate::domain::scroll::Easing;
use std::time::{Duration, Instant};

/// Duration of the image fade-in once bytes arrive.
pub const FADE_IN: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    from: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Segment {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.target - self.from) * eased
    }
}

/// A single retargetable scalar tween.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTween {
    segment: Option<Segment>,
    /// Value held while idle.
    rest: f32,
}

impl ScrollTween {
    /// Moves the resting value without animating. Cancels any running tween.
    pub fn jump_to(&mut self, value: f32) {
        self.segment = None;
        self.rest = value;
    }
}

impl Animator for ScrollTween {
    fn animate(&mut self, from: f32, target: f32, duration: Duration, easing: Easing, now: Instant) {
        self.rest = target;
        self.segment = Some(Segment {
            from,
            target,
            started_at: now,
            duration,
            easing,
        });
    }

    fn sample(&self, now: Instant) -> Option<f32> {
        let segment = self.segment?;
        if segment.progress(now) >= 1.0 {
            return None;
        }
        Some(segment.value_at(now))
    }

    fn position(&self, now: Instant) -> f32 {
        self.sample(now).unwrap_or(self.rest)
    }

    fn target(&self) -> f32 {
        self.segment.map_or(self.rest, |s| s.target)
    }

    fn cancel(&mut self, now: Instant) {
        let here = self.position(now);
        self.jump_to(here);
    }
}

/// Opacity of an image that finished loading at `loaded_at`.
#[must_use]
pub fn fade_in_opacity(loaded_at: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(loaded_at);
    Easing::Linear.apply(elapsed.as_secs_f32() / FADE_IN.as_secs_f32())
}

/// Returns `true` while the fade-in started at `loaded_at` is still visible.
#[must_use]
pub fn is_fading(loaded_at: Instant, now: Instant) -> bool {
    now.saturating_duration_since(loaded_at) < FADE_IN
}
