//! Particle-network background: dots drifting around a canvas, bouncing off
//! its walls and off an obstacle rectangle (typically the page title's
//! bounding box), joined by lines that fade with distance.

mod links;
mod particle;
mod surface;

use glam::Vec2;
pub use links::{link_opacity, links, Link};
pub use particle::{Edge, Particle, Rect};
use rand::{rngs::StdRng, SeedableRng};
pub use surface::{DrawCommand, RecordingSurface, Stroke, Surface2d};

use crate::{
    animation::{AttributeBuffer, Clock, FrameAnimator, FrameUpdate},
    options::NetworkOptions,
};

/// Owns the particles and canvas geometry of one network background.
pub struct NetworkScene {
    bounds: Vec2,
    particles: Vec<Particle>,
    positions: AttributeBuffer<[f32; 2]>,
    obstacle: Option<Rect>,
    options: NetworkOptions,
}

impl NetworkScene {
    /// Spawn `options.particle_count` particles on a `width` x `height`
    /// canvas. The same seed always spawns the same particles.
    #[must_use]
    pub fn new(width: f32, height: f32, options: &NetworkOptions, seed: u64) -> Self {
        let bounds = Vec2::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..options.particle_count)
            .map(|_| {
                Particle::spawn(
                    &mut rng,
                    bounds,
                    options.particle_radius,
                    options.max_speed,
                )
            })
            .collect();
        Self::with_particles(width, height, particles, options)
    }

    /// Scene over an explicit particle list.
    #[must_use]
    pub fn with_particles(
        width: f32,
        height: f32,
        particles: Vec<Particle>,
        options: &NetworkOptions,
    ) -> Self {
        let positions = AttributeBuffer::new(
            particles.iter().map(|p| p.position.to_array()).collect(),
        );
        log::debug!(
            "network scene: {} particles on {width}x{height}",
            particles.len()
        );
        Self {
            bounds: Vec2::new(width, height),
            particles,
            positions,
            obstacle: None,
            options: options.clone(),
        }
    }

    /// Canvas size.
    #[must_use]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Particles in spawn order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particle centres, indexed like [`particles`](Self::particles).
    #[must_use]
    pub fn positions(&self) -> &AttributeBuffer<[f32; 2]> {
        &self.positions
    }

    /// Mutable position buffer, for the consumer's dirty handshake.
    pub fn positions_mut(&mut self) -> &mut AttributeBuffer<[f32; 2]> {
        &mut self.positions
    }

    /// Current obstacle rectangle.
    #[must_use]
    pub fn obstacle(&self) -> Option<Rect> {
        self.obstacle
    }

    /// Replace (or remove) the obstacle rectangle.
    pub fn set_obstacle(&mut self, obstacle: Option<Rect>) {
        self.obstacle = obstacle;
    }

    /// New canvas size. Particles outside the new bounds are pulled back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        for p in &mut self.particles {
            p.clamp_into(self.bounds);
        }
        self.sync_positions();
    }

    /// Connector lines for the current particle positions.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        links(&self.particles, self.options.link_distance)
    }

    /// Draw the current frame: clear, connector lines, then particles.
    pub fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.bounds.x, self.bounds.y);

        let [r, g, b] = self.options.line_color;
        for link in self.links() {
            surface.stroke_line(
                self.particles[link.a].position,
                self.particles[link.b].position,
                Stroke {
                    color: [r, g, b, link.opacity],
                    width: self.options.line_width,
                },
            );
        }

        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, self.options.particle_color);
        }
    }

    fn sync_positions(&mut self) {
        let particles = &self.particles;
        self.positions.update(|slots| {
            for (slot, p) in slots.iter_mut().zip(particles) {
                *slot = p.position.to_array();
            }
        });
    }
}

impl FrameAnimator for NetworkScene {
    fn tick(&mut self, _clock: &Clock) -> FrameUpdate {
        if self.particles.is_empty() {
            return FrameUpdate::Unchanged;
        }
        let margin = self.options.obstacle_margin;
        for p in &mut self.particles {
            p.step(self.bounds, self.obstacle.as_ref(), margin);
        }
        self.sync_positions();
        FrameUpdate::Dirty
    }

    fn name(&self) -> &'static str {
        "network"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> NetworkOptions {
        NetworkOptions::default()
    }

    #[test]
    fn spawns_configured_count_deterministically() {
        let a = NetworkScene::new(800.0, 600.0, &options(), 9);
        let b = NetworkScene::new(800.0, 600.0, &options(), 9);
        assert_eq!(a.particles().len(), 30);
        assert_eq!(a.positions().len(), 30);
        assert_eq!(a.particles(), b.particles());
        for p in a.particles() {
            assert_eq!(p.radius, 2.0);
            assert!(p.velocity.x.abs() <= 2.0 && p.velocity.y.abs() <= 2.0);
        }
    }

    #[test]
    fn tick_moves_particles_and_buffer_together() {
        let particle = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 2.0), 2.0);
        let mut scene = NetworkScene::with_particles(100.0, 100.0, vec![particle], &options());
        let _ = scene.positions_mut().take_dirty();

        assert!(scene.tick(&Clock::new()).is_dirty());
        assert_eq!(scene.particles()[0].position, Vec2::new(51.0, 52.0));
        assert_eq!(scene.positions().get(0), Some([51.0, 52.0]));
        assert!(scene.positions().is_dirty());
    }

    #[test]
    fn empty_scene_is_inert() {
        let mut opts = options();
        opts.particle_count = 0;
        let mut scene = NetworkScene::new(800.0, 600.0, &opts, 1);
        assert!(!scene.tick(&Clock::new()).is_dirty());
        assert!(scene.positions().is_empty());

        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn obstacle_deflects_particles() {
        let particle = Particle::new(Vec2::new(39.0, 60.0), Vec2::new(1.0, 0.0), 2.0);
        let mut scene = NetworkScene::with_particles(200.0, 200.0, vec![particle], &options());
        scene.set_obstacle(Some(Rect::new(40.0, 40.0, 40.0, 40.0)));
        let _ = scene.tick(&Clock::new());
        assert_eq!(scene.particles()[0].velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(scene.particles()[0].position, Vec2::new(38.0, 60.0));
    }

    #[test]
    fn draw_emits_lines_then_circles() {
        let particles = vec![
            Particle::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 2.0),
            Particle::new(Vec2::new(135.0, 10.0), Vec2::ZERO, 2.0),
        ];
        let scene = NetworkScene::with_particles(400.0, 400.0, particles, &options());
        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface);

        // two self-pairs and one real pair
        assert_eq!(surface.line_count(), 3);
        assert_eq!(surface.circle_count(), 2);
        let half = surface.commands().iter().find_map(|c| match c {
            DrawCommand::Line { from, to, stroke } if from != to => Some(stroke.color[3]),
            _ => None,
        });
        assert_eq!(half, Some(0.5));
        assert!(matches!(
            surface.commands().last(),
            Some(DrawCommand::Circle { .. })
        ));
    }

    #[test]
    fn resize_pulls_particles_inside() {
        let particle = Particle::new(Vec2::new(700.0, 500.0), Vec2::ZERO, 2.0);
        let mut scene = NetworkScene::with_particles(800.0, 600.0, vec![particle], &options());
        scene.resize(320.0, 240.0);
        assert_eq!(scene.bounds(), Vec2::new(320.0, 240.0));
        assert_eq!(scene.positions().get(0), Some([318.0, 238.0]));
    }
}
