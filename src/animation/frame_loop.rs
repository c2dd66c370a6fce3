//! The frame loop: pulls timestamps from a scheduler and runs one
//! synchronous tick per frame.

use web_time::Duration;

use super::{Clock, FrameAnimator, FrameScheduler, FrameUpdate};

/// Summary of a finished [`FrameLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Frames ticked.
    pub frames: u64,
    /// Frames whose tick reported a dirty buffer.
    pub dirty_frames: u64,
}

/// Drives ticks from an injected [`FrameScheduler`].
///
/// Ticks never overlap: the next timestamp is only requested after the
/// previous tick returned. The loop ends when the scheduler stops yielding
/// frames.
#[derive(Debug, Default)]
pub struct FrameLoop {
    clock: Clock,
}

impl FrameLoop {
    /// Loop at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The clock as of the most recent frame.
    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Advance to `elapsed` and tick every animator once, in order.
    pub fn step(
        &mut self,
        elapsed: Duration,
        animators: &mut [&mut dyn FrameAnimator],
    ) -> FrameUpdate {
        self.clock.advance_to(elapsed);
        let clock = self.clock;
        animators
            .iter_mut()
            .fold(FrameUpdate::Unchanged, |acc, animator| {
                acc.merge(animator.tick(&clock))
            })
    }

    /// Run `frame` once per scheduled frame until the scheduler stops.
    pub fn run<S, F>(&mut self, scheduler: &mut S, mut frame: F) -> RunStats
    where
        S: FrameScheduler + ?Sized,
        F: FnMut(&Clock) -> FrameUpdate,
    {
        let mut stats = RunStats::default();
        while let Some(elapsed) = scheduler.next_frame() {
            self.clock.advance_to(elapsed);
            if frame(&self.clock).is_dirty() {
                stats.dirty_frames += 1;
            }
            stats.frames += 1;
        }
        log::debug!(
            "frame loop stopped after {} frames ({} dirty)",
            stats.frames,
            stats.dirty_frames
        );
        stats
    }

    /// Run a fixed set of animators until the scheduler stops.
    pub fn run_animators<S>(
        &mut self,
        scheduler: &mut S,
        animators: &mut [&mut dyn FrameAnimator],
    ) -> RunStats
    where
        S: FrameScheduler + ?Sized,
    {
        self.run(scheduler, |clock| {
            animators
                .iter_mut()
                .fold(FrameUpdate::Unchanged, |acc, animator| {
                    acc.merge(animator.tick(clock))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FixedStepScheduler;

    /// Counts ticks and records the elapsed time it saw.
    #[derive(Default)]
    struct Probe {
        seen: Vec<f32>,
    }

    impl FrameAnimator for Probe {
        fn tick(&mut self, clock: &Clock) -> FrameUpdate {
            self.seen.push(clock.elapsed_secs());
            FrameUpdate::Dirty
        }
    }

    /// Never changes anything.
    struct Idle;

    impl FrameAnimator for Idle {
        fn tick(&mut self, _clock: &Clock) -> FrameUpdate {
            FrameUpdate::Unchanged
        }
    }

    #[test]
    fn run_ticks_once_per_scheduled_frame() {
        let mut probe = Probe::default();
        let mut sched = FixedStepScheduler::new(Duration::from_millis(500))
            .with_frame_limit(4);
        let stats = FrameLoop::new().run_animators(&mut sched, &mut [&mut probe]);
        assert_eq!(stats.frames, 4);
        assert_eq!(stats.dirty_frames, 4);
        assert_eq!(probe.seen, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn clean_frames_are_not_counted_dirty() {
        let mut idle = Idle;
        let mut sched =
            FixedStepScheduler::at_fps(60).with_frame_limit(10);
        let stats = FrameLoop::new().run_animators(&mut sched, &mut [&mut idle]);
        assert_eq!(stats.frames, 10);
        assert_eq!(stats.dirty_frames, 0);
    }

    #[test]
    fn step_merges_updates() {
        let mut frame_loop = FrameLoop::new();
        let mut probe = Probe::default();
        let mut idle = Idle;
        let update = frame_loop
            .step(Duration::from_secs(1), &mut [&mut idle, &mut probe]);
        assert!(update.is_dirty());
        assert_eq!(frame_loop.clock().frame(), 1);

        let update = frame_loop.step(Duration::from_secs(2), &mut [&mut idle]);
        assert!(!update.is_dirty());
    }

    #[test]
    fn stopped_scheduler_runs_nothing() {
        let mut probe = Probe::default();
        let mut never = || -> Option<Duration> { None };
        let stats = FrameLoop::new().run_animators(&mut never, &mut [&mut probe]);
        assert_eq!(stats, RunStats::default());
        assert!(probe.seen.is_empty());
    }
}
