//! World transform owned by each scene object

use crate::foundation::math::{euler_rotation, Mat4, Vec3};

/// Translation, rotation, and scale with a cached world matrix
///
/// Fields are mutated freely between frames; the matrix is only brought up
/// to date by [`WorldTransform::update_matrix`], which is a pure function of
/// the current field values.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldTransform {
    /// Position in engine space
    pub translation: Vec3,
    /// Euler rotation in radians, engine space
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
    matrix: Mat4,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldTransform {
    /// Create an identity transform
    pub fn new() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            matrix: Mat4::identity(),
        }
    }

    /// Recompute the world matrix from the current translation, rotation,
    /// and scale
    pub fn update_matrix(&mut self) {
        self.matrix = Mat4::new_translation(&self.translation)
            * euler_rotation(self.rotation)
            * Mat4::new_nonuniform_scaling(&self.scale);
    }

    /// The world matrix as of the last [`WorldTransform::update_matrix`]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_by_default() {
        let transform = WorldTransform::new();
        assert_eq!(*transform.matrix(), Mat4::identity());
    }

    #[test]
    fn test_update_matrix_applies_translation() {
        let mut transform = WorldTransform::new();
        transform.translation = Vec3::new(1.0, 2.0, 3.0);
        transform.update_matrix();

        let origin = transform
            .matrix()
            .transform_point(&nalgebra::Point3::origin());
        assert_relative_eq!(
            origin,
            nalgebra::Point3::new(1.0, 2.0, 3.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_update_matrix_is_idempotent() {
        let mut transform = WorldTransform::new();
        transform.translation = Vec3::new(5.0, -1.0, 0.5);
        transform.rotation = Vec3::new(0.1, 0.2, 0.3);
        transform.scale = Vec3::new(2.0, 2.0, 2.0);

        transform.update_matrix();
        let first = *transform.matrix();
        transform.update_matrix();
        assert_eq!(*transform.matrix(), first);
    }

    #[test]
    fn test_matrix_tracks_field_changes() {
        let mut transform = WorldTransform::new();
        transform.translation = Vec3::new(1.0, 0.0, 0.0);
        transform.update_matrix();
        let before = *transform.matrix();

        transform.translation = Vec3::new(2.0, 0.0, 0.0);
        transform.update_matrix();
        assert_ne!(*transform.matrix(), before);
    }
}
