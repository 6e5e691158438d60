// SPDX-License-Identifier: MPL-2.0
//! Wheel-to-horizontal scroll remapping.
//!
//! While attached, every wheel event over the strip is turned into a tween
//! of the horizontal offset: `target = current + primary * sensitivity`.
//! A new event retargets the running tween from wherever it currently is,
//! so fast wheeling chases a moving target instead of queuing jumps.
//!
//! The remapper never touches the widget itself. It reports outcomes and
//! offsets; the gallery turns them into `scroll_to` operations.

use super::tween::ScrollTween;
use crate::application::port::Animator;
use crate::domain::scroll::{Easing, ScrollSensitivity, TweenDuration, WheelDelta};
use std::time::Instant;

/// Result of feeding one wheel event to the remapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// A tween now runs from `from` towards `target`.
    Retargeted { from: f32, target: f32 },
    /// Nothing to do: zero delta, pinned at the edge, or content that fits.
    Skipped,
    /// The remapper is detached and left the event alone.
    Detached,
}

/// Remaps wheel input to a tweened horizontal offset.
#[derive(Debug, Clone)]
pub struct ScrollRemapper<A: Animator = ScrollTween> {
    animator: A,
    attached: bool,
    sensitivity: ScrollSensitivity,
    duration: TweenDuration,
    easing: Easing,
    /// Last offset reported by the scrollable.
    offset: f32,
    /// Largest reachable offset, once the content has been measured.
    /// The scrollable only reports it when the content overflows.
    max_offset: Option<f32>,
    /// A tween finished since the last tick and its target was not applied yet.
    settle_pending: bool,
}

impl Default for ScrollRemapper<ScrollTween> {
    fn default() -> Self {
        Self::new(ScrollTween::default())
    }
}

impl<A: Animator> ScrollRemapper<A> {
    /// Creates a detached remapper with the default tuning
    /// (6.5x sensitivity, 800 ms, cubic ease-out).
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            attached: false,
            sensitivity: ScrollSensitivity::default(),
            duration: TweenDuration::default(),
            easing: Easing::Power2Out,
            offset: 0.0,
            max_offset: None,
            settle_pending: false,
        }
    }

    /// Starts consuming wheel events. Attaching twice is a no-op.
    pub fn attach(&mut self) {
        if !self.attached {
            tracing::debug!("scroll remapper attached");
            self.attached = true;
        }
    }

    /// Stops consuming wheel events and cancels any running tween.
    pub fn detach(&mut self, now: Instant) {
        if self.attached {
            tracing::debug!("scroll remapper detached");
        }
        self.attached = false;
        self.animator.cancel(now);
        self.settle_pending = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Records the offset and extent reported by the scrollable.
    pub fn observe(&mut self, offset: f32, max_offset: Option<f32>) {
        self.offset = offset;
        self.max_offset = max_offset.map(|max| max.max(0.0));
    }

    /// Forgets the current offset, e.g. after the strip was rebuilt.
    pub fn reset(&mut self, now: Instant) {
        self.animator.cancel(now);
        self.settle_pending = false;
        self.offset = 0.0;
        self.max_offset = None;
    }

    /// Offset at `now`: the tween's value while it runs, otherwise the
    /// last reported offset.
    #[must_use]
    pub fn current_offset(&self, now: Instant) -> f32 {
        self.animator.sample(now).unwrap_or(self.offset)
    }

    /// Content that never reported an extent fits the strip: nothing to scroll.
    fn clamp(&self, offset: f32) -> f32 {
        offset.max(0.0).min(self.max_offset.unwrap_or(0.0))
    }

    /// Feeds one wheel event.
    pub fn handle_wheel(&mut self, delta: WheelDelta, now: Instant) -> WheelOutcome {
        if !self.attached {
            return WheelOutcome::Detached;
        }

        let primary = delta.primary();
        if primary == 0.0 {
            return WheelOutcome::Skipped;
        }

        let from = self.current_offset(now);
        let target = self.clamp(from + primary * self.sensitivity.value());
        if (target - from).abs() < f32::EPSILON && !self.animator.is_running(now) {
            return WheelOutcome::Skipped;
        }

        self.animator
            .animate(from, target, self.duration.as_duration(), self.easing, now);
        self.settle_pending = true;
        WheelOutcome::Retargeted { from, target }
    }

    /// Offset to apply on this frame, if any.
    ///
    /// Returns the sampled value while the tween runs, then the exact target
    /// once after it finishes.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if let Some(value) = self.animator.sample(now) {
            return Some(value);
        }
        if self.settle_pending {
            self.settle_pending = false;
            let target = self.animator.target();
            self.offset = target;
            return Some(target);
        }
        None
    }

    /// Whether frames are still needed to drive the scroll.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.settle_pending || self.animator.is_running(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    fn attached() -> ScrollRemapper {
        let mut remapper = ScrollRemapper::default();
        remapper.attach();
        remapper
    }

    fn target_of(outcome: WheelOutcome) -> f32 {
        match outcome {
            WheelOutcome::Retargeted { target, .. } => target,
            other => panic!("expected a retarget, got {other:?}"),
        }
    }

    #[test]
    fn vertical_delta_drives_horizontal_target() {
        let now = Instant::now();
        let mut remapper = attached();
        remapper.observe(200.0, Some(5_000.0));

        let outcome = remapper.handle_wheel(WheelDelta::new(0.0, 10.0), now);

        assert_abs_diff_eq!(target_of(outcome), 265.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn horizontal_delta_is_the_fallback() {
        let now = Instant::now();
        let mut remapper = attached();
        remapper.observe(200.0, Some(5_000.0));

        let outcome = remapper.handle_wheel(WheelDelta::new(-8.0, 0.0), now);
        assert_abs_diff_eq!(target_of(outcome), 148.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn vertical_wins_when_both_axes_move() {
        let now = Instant::now();
        let mut remapper = attached();
        remapper.observe(0.0, Some(5_000.0));

        let outcome = remapper.handle_wheel(WheelDelta::new(100.0, 2.0), now);
        assert_abs_diff_eq!(target_of(outcome), 13.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn detached_remapper_ignores_wheel() {
        let now = Instant::now();
        let mut remapper = ScrollRemapper::default();
        remapper.observe(50.0, None);

        let outcome = remapper.handle_wheel(WheelDelta::new(0.0, 10.0), now);

        assert_eq!(outcome, WheelOutcome::Detached);
        assert!(!remapper.is_animating(now));
        assert_eq!(remapper.tick(now), None);
    }

    #[test]
    fn zero_delta_is_skipped_without_a_tween() {
        let now = Instant::now();
        let mut remapper = attached();

        let outcome = remapper.handle_wheel(WheelDelta::new(0.0, 0.0), now);

        assert_eq!(outcome, WheelOutcome::Skipped);
        assert!(!remapper.is_animating(now));
    }

    #[test]
    fn second_event_retargets_from_mid_tween_offset() {
        let start = Instant::now();
        let mut remapper = attached();
        remapper.observe(0.0, Some(5_000.0));

        let first = remapper.handle_wheel(WheelDelta::new(0.0, 100.0), start);
        assert_abs_diff_eq!(target_of(first), 650.0, epsilon = F32_EPSILON);

        // Halfway through: cubic ease-out sits at 87.5 %.
        let mid = start + Duration::from_millis(400);
        let mid_offset = remapper.current_offset(mid);
        assert_abs_diff_eq!(mid_offset, 568.75, epsilon = 0.01);

        let second = remapper.handle_wheel(WheelDelta::new(0.0, 100.0), mid);
        match second {
            WheelOutcome::Retargeted { from, target } => {
                assert_abs_diff_eq!(from, mid_offset, epsilon = 0.01);
                assert_abs_diff_eq!(target, mid_offset + 650.0, epsilon = 0.01);
            }
            other => panic!("expected a retarget, got {other:?}"),
        }
    }

    #[test]
    fn targets_are_clamped_to_content_extent() {
        let now = Instant::now();
        let mut remapper = attached();
        remapper.observe(900.0, Some(1000.0));

        let forward = remapper.handle_wheel(WheelDelta::new(0.0, 100.0), now);
        assert_abs_diff_eq!(target_of(forward), 1000.0);

        remapper.reset(now);
        remapper.observe(20.0, Some(1000.0));
        let backward = remapper.handle_wheel(WheelDelta::new(0.0, -100.0), now);
        assert_abs_diff_eq!(target_of(backward), 0.0);
    }

    #[test]
    fn wheel_at_the_edge_is_skipped() {
        let now = Instant::now();
        let mut remapper = attached();
        remapper.observe(0.0, Some(500.0));

        let outcome = remapper.handle_wheel(WheelDelta::new(0.0, -10.0), now);
        assert_eq!(outcome, WheelOutcome::Skipped);
    }

    #[test]
    fn content_that_fits_never_tweens() {
        let now = Instant::now();
        let mut remapper = attached();

        let outcome = remapper.handle_wheel(WheelDelta::new(0.0, 120.0), now);

        assert_eq!(outcome, WheelOutcome::Skipped);
        assert!(!remapper.is_animating(now));
        assert_eq!(remapper.tick(now), None);
        assert_abs_diff_eq!(remapper.current_offset(now), 0.0);
    }

    #[test]
    fn tick_samples_then_settles_once() {
        let start = Instant::now();
        let mut remapper = attached();
        remapper.observe(0.0, Some(5_000.0));
        let _ = remapper.handle_wheel(WheelDelta::new(0.0, 10.0), start);

        let during = remapper.tick(start + Duration::from_millis(100)).expect("running");
        assert!(during > 0.0 && during < 65.0);

        let end = start + Duration::from_secs(1);
        assert_abs_diff_eq!(remapper.tick(end).expect("settles"), 65.0);
        assert_eq!(remapper.tick(end), None);
        assert!(!remapper.is_animating(end));
        assert_abs_diff_eq!(remapper.current_offset(end), 65.0);
    }

    #[test]
    fn detach_cancels_and_attach_is_idempotent() {
        let start = Instant::now();
        let mut remapper = attached();
        remapper.attach();
        assert!(remapper.is_attached());
        remapper.observe(0.0, Some(5_000.0));

        let _ = remapper.handle_wheel(WheelDelta::new(0.0, 10.0), start);
        remapper.detach(start + Duration::from_millis(100));

        assert!(!remapper.is_attached());
        assert!(!remapper.is_animating(start + Duration::from_millis(100)));
    }
}
