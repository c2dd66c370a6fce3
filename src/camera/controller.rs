use glam::{Mat4, Quat, Vec2, Vec3};

use crate::options::CameraOptions;

/// Orbit camera: a focus point, an orientation around it, and a distance
/// clamped to the configured bounds.
///
/// Pure math; the host feeds it pointer deltas and reads back the view.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    fovy: f32,
    min_distance: f32,
    max_distance: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl OrbitCamera {
    /// Camera looking down -Z at the origin from the middle of its distance
    /// range.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let min_distance = options.min_distance.max(f32::EPSILON);
        let max_distance = options.max_distance.max(min_distance);
        Self {
            orientation: Quat::IDENTITY,
            distance: (min_distance + max_distance) * 0.5,
            focus_point: Vec3::ZERO,
            fovy: options.fovy,
            min_distance,
            max_distance,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.focus_point + (self.orientation * Vec3::Z) * self.distance
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.focus_point
    }

    /// Camera up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Distance from eye to focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), self.up())
    }

    /// Orbit by a pointer drag in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical * self.orientation).normalize();
    }

    /// Slide the focus point by a pointer drag in pixels.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        self.focus_point += right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);
    }

    /// Dolly in (positive) or out (negative) by wheel notches.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
    }

    /// Centre on the positions' centroid and back off until their bounding
    /// sphere fits the field of view.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;

        let half_fov = (self.fovy.to_radians() / 2.0).max(f32::EPSILON);
        let fit_distance = radius / half_fov.tan();
        // 1.5x padding for comfortable view
        self.distance = (fit_distance * 1.5)
            .clamp(self.min_distance, self.max_distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraOptions::default())
    }

    #[test]
    fn starts_on_positive_z_looking_at_origin() {
        let cam = camera();
        let eye = cam.eye();
        assert!(eye.z > 0.0);
        assert!(eye.x.abs() < 1e-6 && eye.y.abs() < 1e-6);
        assert_eq!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn zoom_respects_distance_bounds() {
        let mut cam = camera();
        for _ in 0..500 {
            cam.zoom(5.0);
        }
        assert_eq!(cam.distance(), CameraOptions::default().min_distance);
        for _ in 0..500 {
            cam.zoom(-5.0);
        }
        assert_eq!(cam.distance(), CameraOptions::default().max_distance);
    }

    #[test]
    fn rotate_keeps_distance() {
        let mut cam = camera();
        let before = cam.distance();
        cam.rotate(Vec2::new(120.0, -45.0));
        assert!(((cam.eye() - cam.target()).length() - before).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_focus_point() {
        let mut cam = camera();
        cam.pan(Vec2::new(-10.0, 0.0));
        assert!(cam.target().x > 0.0);
    }

    #[test]
    fn fit_centres_on_positions() {
        let mut cam = camera();
        let positions = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(30.0, 0.0, 0.0),
        ];
        cam.fit_to_positions(&positions);
        assert_eq!(cam.target(), Vec3::new(20.0, 0.0, 0.0));
        let expected = 10.0 / (45.0_f32.to_radians() / 2.0).tan() * 1.5;
        assert!((cam.distance() - expected).abs() < 1e-3);
    }

    #[test]
    fn fit_ignores_empty_input() {
        let mut cam = camera();
        let before = cam.clone();
        cam.fit_to_positions(&[]);
        assert_eq!(cam, before);
    }
}
