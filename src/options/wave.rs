use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colour Wave", inline)]
#[serde(default)]
/// Per-atom HSL colour wave driven by normalized height and time.
pub struct WaveOptions {
    /// Whether the wave recolours atoms every frame.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Spatial frequency: hue cycles per unit of normalized height.
    #[schemars(title = "Frequency", range(min = 0.0, max = 4.0), extend("step" = 0.01))]
    pub frequency: f32,
    /// Temporal speed: hue cycles per second.
    #[schemars(title = "Speed", range(min = 0.0, max = 4.0), extend("step" = 0.01))]
    pub speed: f32,
    /// HSL saturation of the generated colours.
    #[schemars(skip)]
    pub saturation: f32,
    /// HSL lightness of the generated colours.
    #[schemars(skip)]
    pub lightness: f32,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 0.1,
            speed: 0.5,
            saturation: 1.0,
            lightness: 0.5,
        }
    }
}
