use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Network", inline)]
#[serde(default)]
/// Particle-network background parameters. Distances are in pixels.
pub struct NetworkOptions {
    /// Number of particles spawned at construction.
    #[schemars(title = "Particles", range(min = 0, max = 500))]
    pub particle_count: usize,
    /// Radius of every particle.
    #[schemars(title = "Particle Radius", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub particle_radius: f32,
    /// Spawn velocity per axis is drawn uniformly from `[-max_speed,
    /// max_speed]`.
    #[schemars(title = "Max Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Pairs closer than this get a connector line.
    #[schemars(title = "Link Distance", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub link_distance: f32,
    /// Distance from an obstacle edge within which a particle bounces.
    #[schemars(title = "Obstacle Margin", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub obstacle_margin: f32,
    /// Stroke width of connector lines.
    #[schemars(skip)]
    pub line_width: f32,
    /// RGB of connector lines; alpha comes from the link opacity.
    #[schemars(skip)]
    pub line_color: [f32; 3],
    /// RGBA fill of particles.
    #[schemars(skip)]
    pub particle_color: [f32; 4],
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            particle_count: 30,
            particle_radius: 2.0,
            max_speed: 2.0,
            link_distance: 250.0,
            obstacle_margin: 10.0,
            line_width: 1.0,
            line_color: [1.0, 1.0, 1.0],
            particle_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}
