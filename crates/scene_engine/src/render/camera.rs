//! Camera for viewing the scene

use crate::foundation::math::{Mat4, Point3, Vec3};

/// A perspective camera
///
/// The scene owns one camera and passes it to every draw call. View and
/// projection matrices are derived on demand from the current fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in engine space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, -10.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Compute the view matrix from the current position and target
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Compute the perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov_y, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
