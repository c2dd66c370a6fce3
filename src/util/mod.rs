//! Shared utilities for the animators.
//!
//! Helpers for HSL colour conversion and wall-clock frame pacing.

pub mod color;
pub mod frame_timing;
