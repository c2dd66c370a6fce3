//! Orbit camera state for the molecular scene.

mod controller;

pub use controller::OrbitCamera;
