//! Camera for 3D orbit view.

use glam::{Mat4, Vec3};

/// Orbit camera for viewing the flock.
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Near clip plane.
    pub znear: f32,
    /// Far clip plane.
    pub zfar: f32,
}

impl Camera {
    /// Create a new camera with default positioning.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.3,
            distance: 3.0,
            target: Vec3::ZERO,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Create a camera framed on a bounding cube of the given half-size.
    pub fn framing(bounds: f32) -> Self {
        Self {
            distance: bounds * 2.5,
            znear: (bounds * 0.01).max(0.01),
            zfar: bounds * 40.0,
            ..Self::new()
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Combined view-projection matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), aspect, self.znear, self.zfar);
        proj * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_distance() {
        let camera = Camera::new();
        let len = (camera.position() - camera.target).length();
        assert!((len - camera.distance).abs() < 1e-5);
    }

    #[test]
    fn test_framing_scales_with_bounds() {
        let camera = Camera::framing(256.0);
        assert!((camera.distance - 640.0).abs() < 1e-3);
        assert!(camera.znear > 0.0);
        assert!(camera.zfar > camera.distance);
    }

    #[test]
    fn test_view_matrix_centers_target() {
        let camera = Camera::new();
        let viewed = camera.view_matrix().transform_point3(camera.target);
        // Target sits on the view axis, distance units in front of the camera.
        assert!(viewed.x.abs() < 1e-5);
        assert!(viewed.y.abs() < 1e-5);
        assert!((viewed.z + camera.distance).abs() < 1e-4);
    }

    #[test]
    fn test_yaw_orbits_around_y() {
        let mut camera = Camera::new();
        camera.pitch = 0.0;
        camera.yaw = 0.0;
        let front = camera.position();
        camera.yaw = std::f32::consts::PI;
        let back = camera.position();
        assert!((front.z + back.z).abs() < 1e-4);
        assert!((front.y - back.y).abs() < 1e-5);
    }
}
