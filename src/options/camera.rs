use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Closest the camera may orbit to its focus point.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest the camera may orbit from its focus point.
    #[schemars(title = "Max Distance", range(min = 10.0, max = 5000.0), extend("step" = 10.0))]
    pub max_distance: f32,
    /// Rotation sensitivity in radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity in world units per pixel of drag.
    #[schemars(title = "Pan Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pan_speed: f32,
    /// Zoom sensitivity per wheel notch.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            min_distance: 5.0,
            max_distance: 500.0,
            rotate_speed: 0.01,
            pan_speed: 0.1,
            zoom_speed: 0.05,
        }
    }
}
