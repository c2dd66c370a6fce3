use glam::{Mat4, Quat};

use crate::animation::{Clock, FrameAnimator, FrameUpdate};

/// Continuous spin of the molecule's parent transform around Y.
///
/// The angle accumulates without bound; wraparound comes from the periodic
/// sin/cos inside [`Quat::from_rotation_y`]. A fixed-point port would need
/// an explicit modulo here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    speed: f32,
}

impl Spin {
    /// Spin at `speed` radians per second, starting at angle zero.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed }
    }

    /// Accumulated angle in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Radians per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the speed; the accumulated angle is kept.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Current orientation of the parent transform.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }

    /// Current parent transform as a matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation())
    }
}

impl FrameAnimator for Spin {
    fn tick(&mut self, clock: &Clock) -> FrameUpdate {
        let step = self.speed * clock.delta_secs();
        if step == 0.0 {
            return FrameUpdate::Unchanged;
        }
        self.angle += step;
        FrameUpdate::Dirty
    }

    fn name(&self) -> &'static str {
        "spin"
    }
}
