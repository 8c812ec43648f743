//! Renderable object instances

use std::sync::Arc;

use super::world_transform::WorldTransform;
use crate::assets::ModelAsset;

/// A renderable scene object
///
/// Owns its world transform exclusively; the model asset is shared with any
/// other instance that referenced the same file name.
#[derive(Debug, Clone)]
pub struct ObjectInstance {
    /// Engine-space world transform, mutated every frame
    pub transform: WorldTransform,
    model: Arc<ModelAsset>,
}

impl ObjectInstance {
    /// Create an instance binding a transform to a model asset
    pub fn new(transform: WorldTransform, model: Arc<ModelAsset>) -> Self {
        Self { transform, model }
    }

    /// The model asset this instance draws
    pub fn model(&self) -> &Arc<ModelAsset> {
        &self.model
    }

    /// Recompute the world matrix from the current transform fields
    pub fn update(&mut self) {
        self.transform.update_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_update_recomputes_matrix_only() {
        let model = Arc::new(ModelAsset::new("cube.obj", Vec::new(), Vec::new()));
        let mut instance = ObjectInstance::new(WorldTransform::new(), Arc::clone(&model));

        instance.transform.translation = Vec3::new(0.0, 4.0, 0.0);
        instance.update();

        // The matrix reflects the new translation; the model is untouched
        let moved = instance
            .transform
            .matrix()
            .transform_point(&nalgebra::Point3::origin());
        assert_eq!(moved, nalgebra::Point3::new(0.0, 4.0, 0.0));
        assert!(Arc::ptr_eq(instance.model(), &model));
    }
}
