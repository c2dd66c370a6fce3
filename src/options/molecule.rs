use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Molecule", inline)]
#[serde(default)]
/// Spin and ball-and-stick geometry parameters for a loaded structure.
pub struct MoleculeOptions {
    /// Spin of the parent transform around Y, in radians per second.
    #[schemars(title = "Rotation Speed", range(min = -3.0, max = 3.0), extend("step" = 0.05))]
    pub rotation_speed: f32,
    /// Sphere radius of each atom instance.
    #[schemars(title = "Atom Radius", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub atom_radius: f32,
    /// Cylinder radius of each bond segment.
    #[schemars(title = "Bond Radius", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub bond_radius: f32,
    /// Translate atoms so their centroid sits at the origin on load.
    #[schemars(title = "Center On Load")]
    pub center_on_load: bool,
    /// RGB used for atoms the loader supplied no colour for.
    #[schemars(skip)]
    pub base_color: [f32; 3],
}

impl Default for MoleculeOptions {
    fn default() -> Self {
        Self {
            rotation_speed: 0.3,
            atom_radius: 0.4,
            bond_radius: 0.1,
            center_on_load: true,
            base_color: [0.6, 0.6, 0.6],
        }
    }
}
