use glam::Vec3;

/// Min/max of atom Y coordinates, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightExtent {
    min: f32,
    max: f32,
}

impl HeightExtent {
    /// Extent over `positions`, or `None` when there are no atoms.
    #[must_use]
    pub fn from_positions(positions: &[Vec3]) -> Option<Self> {
        let first = positions.first()?;
        let (min, max) = positions
            .iter()
            .fold((first.y, first.y), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        Some(Self { min, max })
    }

    /// Lowest Y.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Highest Y.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Rescale `y` into `[0, 1]`. A flat molecule maps everything to `0.5`.
    #[must_use]
    pub fn normalize(&self, y: f32) -> f32 {
        let range = self.range();
        if range == 0.0 {
            return 0.5;
        }
        ((y - self.min) / range).clamp(0.0, 1.0)
    }

    /// Normalized height of every position, in order.
    #[must_use]
    pub fn normalized_heights(&self, positions: &[Vec3]) -> Vec<f32> {
        positions.iter().map(|p| self.normalize(p.y)).collect()
    }
}
