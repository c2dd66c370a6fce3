//! Particle motion: constant velocity with look-ahead wall bounces and an
//! obstacle rectangle.

use glam::Vec2;
use rand::Rng;

/// Axis-aligned rectangle in canvas pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(left + width, top + height),
        }
    }

    /// Left edge x.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// Right edge x.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// Top edge y.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Bottom edge y.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Whether the square enclosing a circle overlaps the rectangle.
    #[must_use]
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.left()
            && center.x - radius < self.right()
            && center.y + radius > self.top()
            && center.y - radius < self.bottom()
    }
}

/// Which obstacle edge a particle bounced off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Reflected horizontally off the left edge.
    Left,
    /// Reflected horizontally off the right edge.
    Right,
    /// Reflected vertically off the top edge.
    Top,
    /// Reflected vertically off the bottom edge.
    Bottom,
}

/// A moving dot in the network background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Centre in canvas pixels.
    pub position: Vec2,
    /// Pixels per tick, fixed at spawn apart from sign flips.
    pub velocity: Vec2,
    /// Radius in pixels.
    pub radius: f32,
}

impl Particle {
    /// Particle with explicit state.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Random particle fully inside `bounds` with each velocity component
    /// uniform in `[-max_speed, max_speed]`.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        bounds: Vec2,
        radius: f32,
        max_speed: f32,
    ) -> Self {
        let position = Vec2::new(
            uniform(rng, radius, bounds.x - radius),
            uniform(rng, radius, bounds.y - radius),
        );
        let velocity = Vec2::new(
            uniform(rng, -max_speed, max_speed),
            uniform(rng, -max_speed, max_speed),
        );
        Self::new(position, velocity, radius)
    }

    /// Flip any velocity component whose next step would push the edge of
    /// the particle past a canvas wall.
    pub fn bounce_walls(&mut self, bounds: Vec2) {
        let next = self.position + self.velocity;
        if next.x + self.radius >= bounds.x || next.x - self.radius <= 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if next.y + self.radius >= bounds.y || next.y - self.radius <= 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// While overlapping `obstacle`, flip the velocity component normal to
    /// the first edge (left, right, top, bottom) the centre is within
    /// `margin` of.
    pub fn bounce_obstacle(&mut self, obstacle: &Rect, margin: f32) -> Option<Edge> {
        if !obstacle.overlaps_circle(self.position, self.radius) {
            return None;
        }
        let p = self.position;
        let edge = if p.x < obstacle.left() + margin {
            Edge::Left
        } else if p.x > obstacle.right() - margin {
            Edge::Right
        } else if p.y < obstacle.top() + margin {
            Edge::Top
        } else if p.y > obstacle.bottom() - margin {
            Edge::Bottom
        } else {
            return None;
        };
        match edge {
            Edge::Left | Edge::Right => self.velocity.x = -self.velocity.x,
            Edge::Top | Edge::Bottom => self.velocity.y = -self.velocity.y,
        }
        Some(edge)
    }

    /// One tick: obstacle bounce, wall bounce, then move.
    ///
    /// Walls are checked last so they always get the final say and the
    /// particle never leaves the canvas.
    pub fn step(&mut self, bounds: Vec2, obstacle: Option<&Rect>, margin: f32) {
        if let Some(rect) = obstacle {
            let _ = self.bounce_obstacle(rect, margin);
        }
        self.bounce_walls(bounds);
        self.position += self.velocity;
    }

    /// Pull the particle back inside `bounds` after a resize.
    pub fn clamp_into(&mut self, bounds: Vec2) {
        let lo = Vec2::splat(self.radius);
        let hi = (bounds - Vec2::splat(self.radius)).max(lo);
        self.position = self.position.clamp(lo, hi);
    }
}

/// Uniform in `[lo, hi]`; the midpoint when the interval is empty.
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        (lo + hi) * 0.5
    }
}
