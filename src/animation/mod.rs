//! Frame-driven animation core.
//!
//! Animators are plain synchronous units: the [`FrameLoop`] asks an injected
//! [`FrameScheduler`] for the next frame time, advances the [`Clock`], and
//! calls [`FrameAnimator::tick`]. Nothing in here schedules itself, so every
//! animator can be stepped by hand in tests.

mod buffer;
mod clock;
mod frame_loop;
mod scheduler;

pub use buffer::AttributeBuffer;
pub use clock::Clock;
pub use frame_loop::{FrameLoop, RunStats};
pub use scheduler::{FixedStepScheduler, FrameScheduler, PacedScheduler};

/// Dirty signal returned by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub enum FrameUpdate {
    /// Nothing changed; the renderer can reuse last frame's buffers.
    #[default]
    Unchanged,
    /// At least one attribute buffer was rewritten.
    Dirty,
}

impl FrameUpdate {
    /// Whether anything needs re-uploading.
    #[must_use]
    pub fn is_dirty(self) -> bool {
        matches!(self, Self::Dirty)
    }

    /// Dirty if either side is dirty.
    pub fn merge(self, other: Self) -> Self {
        if self.is_dirty() || other.is_dirty() {
            Self::Dirty
        } else {
            Self::Unchanged
        }
    }
}

/// A unit of per-frame procedural update.
///
/// `tick` runs once per display refresh and must not fail: a bad frame is
/// logged and skipped so later frames still run.
pub trait FrameAnimator {
    /// Update owned attribute buffers for the frame described by `clock`.
    fn tick(&mut self, clock: &Clock) -> FrameUpdate;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
