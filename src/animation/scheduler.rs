//! Frame scheduling: the "run this before the next repaint" primitive.
//!
//! A [`FrameScheduler`] is injected into the [`FrameLoop`] from outside.
//! Production hosts bind it to their display refresh; tests and headless
//! runs use [`FixedStepScheduler`] for deterministic timestamps.
//!
//! [`FrameLoop`]: super::FrameLoop

use web_time::{Duration, Instant};

use crate::util::frame_timing::FrameTiming;

/// Source of frame timestamps.
pub trait FrameScheduler {
    /// Wait until the next frame is due and return its time since the loop
    /// started, or `None` once the host stops scheduling frames.
    fn next_frame(&mut self) -> Option<Duration>;
}

impl<F: FnMut() -> Option<Duration>> FrameScheduler for F {
    fn next_frame(&mut self) -> Option<Duration> {
        self()
    }
}

/// Deterministic scheduler advancing by a fixed step per frame.
///
/// The first frame lands at time zero.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    step: Duration,
    next: Duration,
    remaining: Option<u64>,
}

impl FixedStepScheduler {
    /// Unbounded scheduler with the given step.
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            next: Duration::ZERO,
            remaining: None,
        }
    }

    /// Scheduler stepping at `fps` frames per second (clamped to at least 1).
    #[must_use]
    pub fn at_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(fps.max(1))))
    }

    /// Stop after `frames` frames.
    #[must_use]
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn next_frame(&mut self) -> Option<Duration> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let now = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(now)
    }
}

/// Wall-clock scheduler that sleeps to hold a target frame rate.
pub struct PacedScheduler {
    timing: FrameTiming,
    start: Instant,
    remaining: Option<u64>,
}

impl PacedScheduler {
    /// Scheduler targeting `target_fps` (0 = run as fast as possible).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            timing: FrameTiming::new(target_fps),
            start: Instant::now(),
            remaining: None,
        }
    }

    /// Stop after `frames` frames.
    #[must_use]
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }

    /// Smoothed frames per second actually achieved.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}

impl FrameScheduler for PacedScheduler {
    fn next_frame(&mut self) -> Option<Duration> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        self.timing.wait_for_next_frame();
        let now = Instant::now();
        self.timing.end_frame_at(now);
        Some(now.saturating_duration_since(self.start))
    }
}
