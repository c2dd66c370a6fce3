//! Centralized animation options with TOML preset support.
//!
//! Every constant the animators used to hard-code (wave frequency, spin
//! speed, particle count, connector threshold, camera bounds) lives here.
//! Options serialize to/from TOML so presets can be stored on disk.

mod camera;
mod molecule;
mod network;
mod wave;

use std::path::Path;

pub use camera::CameraOptions;
pub use molecule::MoleculeOptions;
pub use network::NetworkOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use wave::WaveOptions;

use crate::error::VizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[wave]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Colour-wave parameters.
    pub wave: WaveOptions,
    /// Molecule spin and geometry parameters.
    pub molecule: MoleculeOptions,
    /// Particle-network parameters.
    pub network: NetworkOptions,
    /// Orbit camera parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VizError> {
        toml::from_str(content)
            .map_err(|e| VizError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VizError> {
        let content = std::fs::read_to_string(path).map_err(VizError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VizError::Io)?;
        }
        std::fs::write(path, content).map_err(VizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[wave]
speed = 0.25
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.wave.speed, 0.25);
        // Everything else should be default
        assert_eq!(opts.wave.frequency, 0.1);
        assert_eq!(opts.network.particle_count, 30);
        assert_eq!(opts.network.link_distance, 250.0);
        assert_eq!(opts.network.obstacle_margin, 10.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[wave\nspeed = ").unwrap_err();
        assert!(matches!(err, VizError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("vizloop-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.network.particle_count = 64;
        opts.save(&dir.join("dense.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("dense.toml")).unwrap();
        assert_eq!(loaded.network.particle_count, 64);
        assert_eq!(Options::list_presets(&dir), vec!["dense".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        let dir = std::env::temp_dir().join("vizloop-no-such-dir");
        assert!(Options::list_presets(&dir).is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("wave"));
        assert!(props.contains_key("molecule"));
        assert!(props.contains_key("network"));
        assert!(props.contains_key("camera"));

        // Colours are edited elsewhere, not through the schema UI
        let network = &props["network"]["properties"];
        assert!(network.get("link_distance").is_some());
        assert!(network.get("line_color").is_none());
    }
}
