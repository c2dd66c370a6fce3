//! Connector lines between nearby particles.

use super::particle::Particle;

/// A line between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle.
    pub a: usize,
    /// Index of the second particle (`>= a`).
    pub b: usize,
    /// Stroke alpha in `(0, 1]`.
    pub opacity: f32,
}

/// Opacity of a connector at `distance`: `1 - distance / threshold`, or
/// `None` at or beyond the threshold.
#[must_use]
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    if threshold <= 0.0 || distance >= threshold {
        return None;
    }
    Some(1.0 - distance / threshold)
}

/// Every pair `(i, j)` with `j >= i` closer than `threshold`.
///
/// Self-pairs are part of the iteration and always qualify (distance 0,
/// opacity 1); they draw as zero-length lines.
#[must_use]
pub fn links(particles: &[Particle], threshold: f32) -> Vec<Link> {
    let mut out = Vec::new();
    for (a, pa) in particles.iter().enumerate() {
        for (b, pb) in particles.iter().enumerate().skip(a) {
            let distance = pa.position.distance(pb.position);
            if let Some(opacity) = link_opacity(distance, threshold) {
                out.push(Link { a, b, opacity });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
    }

    #[test]
    fn opacity_fades_linearly() {
        assert_eq!(link_opacity(0.0, 250.0), Some(1.0));
        assert_eq!(link_opacity(125.0, 250.0), Some(0.5));
        let near_edge = link_opacity(249.0, 250.0).unwrap();
        assert!(near_edge > 0.0 && near_edge <= 1.0);
        assert_eq!(link_opacity(250.0, 250.0), None);
        assert_eq!(link_opacity(400.0, 250.0), None);
    }

    #[test]
    fn degenerate_threshold_draws_nothing() {
        assert_eq!(link_opacity(0.0, 0.0), None);
        assert!(links(&[at(0.0, 0.0)], 0.0).is_empty());
    }

    #[test]
    fn pairs_include_self_pairs() {
        let particles = [at(0.0, 0.0), at(100.0, 0.0), at(400.0, 0.0)];
        let found = links(&particles, 250.0);

        // three self-pairs plus the one near pair
        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .any(|l| l.a == 0 && l.b == 1 && (l.opacity - 0.6).abs() < 1e-6));
        assert!(found.iter().filter(|l| l.a == l.b).all(|l| l.opacity == 1.0));
        assert!(!found.iter().any(|l| l.a == 0 && l.b == 2));
        assert!(found.iter().all(|l| l.b >= l.a));
    }

    #[test]
    fn no_particles_no_links() {
        assert!(links(&[], 250.0).is_empty());
    }
}
