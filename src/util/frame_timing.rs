//! Wall-clock frame pacing and FPS smoothing.

use web_time::{Duration, Instant};

/// Frame pacing with FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Time left before the next frame is due, measured from `now`.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        if self.target_fps == 0 {
            return Duration::ZERO;
        }
        self.min_frame_duration
            .saturating_sub(now.saturating_duration_since(self.last_frame))
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.remaining_at(Instant::now()).is_zero()
    }

    /// Block the current thread until the next frame is due.
    pub fn wait_for_next_frame(&self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    /// Record a frame boundary at `now` and fold it into the FPS average.
    pub fn end_frame_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_waits() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.remaining_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn limited_waits_out_the_frame_budget() {
        let mut timing = FrameTiming::new(10);
        let start = Instant::now();
        timing.end_frame_at(start);
        let half = start + Duration::from_millis(50);
        let remaining = timing.remaining_at(half);
        assert!(remaining > Duration::from_millis(40));
        assert!(remaining <= Duration::from_millis(50));
        assert!(timing
            .remaining_at(start + Duration::from_millis(150))
            .is_zero());
    }

    #[test]
    fn fps_moves_toward_observed_rate() {
        let mut timing = FrameTiming::new(0);
        let mut now = Instant::now();
        for _ in 0..200 {
            now += Duration::from_millis(10);
            timing.end_frame_at(now);
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }
}
