use web_time::Duration;

/// Monotonic frame clock: elapsed time since the loop started and the delta
/// since the previous frame.
///
/// Owned by the frame loop and handed to animators read-only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Clock {
    elapsed: Duration,
    delta: Duration,
    frame: u64,
}

impl Clock {
    /// Clock at time zero, before any frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock frozen at `elapsed` seconds with a zero delta.
    #[must_use]
    pub fn at_secs(elapsed: f32) -> Self {
        Self {
            elapsed: Duration::try_from_secs_f32(elapsed.max(0.0))
                .unwrap_or(Duration::ZERO),
            delta: Duration::ZERO,
            frame: 0,
        }
    }

    /// Move the clock to `elapsed` and start a new frame.
    ///
    /// Time never runs backwards: an earlier timestamp yields a zero delta
    /// and leaves `elapsed` where it was.
    pub fn advance_to(&mut self, elapsed: Duration) {
        self.delta = elapsed.saturating_sub(self.elapsed);
        self.elapsed = self.elapsed.max(elapsed);
        self.frame += 1;
    }

    /// Time since the loop started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Seconds since the loop started.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Seconds since the previous frame.
    #[must_use]
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Number of frames started so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_computes_delta() {
        let mut clock = Clock::new();
        clock.advance_to(Duration::from_millis(16));
        clock.advance_to(Duration::from_millis(48));
        assert_eq!(clock.frame(), 2);
        assert!((clock.delta_secs() - 0.032).abs() < 1e-6);
        assert!((clock.elapsed_secs() - 0.048).abs() < 1e-6);
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut clock = Clock::new();
        clock.advance_to(Duration::from_secs(2));
        clock.advance_to(Duration::from_secs(1));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
        assert_eq!(clock.delta_secs(), 0.0);
    }

    #[test]
    fn negative_seconds_clamp_to_zero() {
        assert_eq!(Clock::at_secs(-3.0).elapsed(), Duration::ZERO);
    }
}
