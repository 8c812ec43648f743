//! Scene instantiation and the per-frame update/draw loop
//!
//! Walks parsed descriptors once, producing renderable instances with
//! engine-space transforms and resolved model assets. Model ownership is
//! shared by policy: assets are deduplicated through a [`ModelCache`] keyed
//! by file name, so every instance referencing the same file holds the same
//! underlying asset.

use super::coordinates::CoordinateConverter;
use super::document::SceneDocument;
use super::instance::ObjectInstance;
use super::world_transform::WorldTransform;
use super::{LoadError, SceneConfig};
use crate::assets::{ModelCache, ModelLoader};
use crate::render::{BackendResult, Camera, RenderBackend};

/// A fully instantiated scene
///
/// Created once per load, then driven every frame via [`Scene::update`] and
/// [`Scene::draw`]. Instances and cached assets live for the scene's
/// lifetime and are released on drop.
#[derive(Debug)]
pub struct Scene {
    camera: Camera,
    objects: Vec<ObjectInstance>,
    models: ModelCache,
}

impl Scene {
    /// Parse the configured document and instantiate it in one step
    ///
    /// # Errors
    /// Any parse, validation, or asset failure aborts the whole load; no
    /// partial scene is returned.
    pub fn load(config: &SceneConfig, loader: &dyn ModelLoader) -> Result<Self, LoadError> {
        let document = SceneDocument::load(&config.scene_path, &config.expected_name)?;
        Self::instantiate(document, loader)
    }

    /// Instantiate a parsed document into renderable instances
    ///
    /// Descriptors are processed in document order. Entries without a model
    /// file name are transform-only markers and are skipped. The document is
    /// consumed; nothing of the intermediate representation outlives
    /// instantiation.
    pub fn instantiate(
        document: SceneDocument,
        loader: &dyn ModelLoader,
    ) -> Result<Self, LoadError> {
        let converter = CoordinateConverter::default();
        let mut models = ModelCache::new();
        let mut objects = Vec::new();

        for descriptor in &document.objects {
            let Some(file_name) = descriptor
                .file_name
                .as_deref()
                .filter(|name| !name.is_empty())
            else {
                log::debug!("Skipping non-visual object '{}'", descriptor.name);
                continue;
            };

            let mut transform = WorldTransform::new();
            transform.translation = converter.convert_vector(descriptor.transform.translation);
            transform.rotation = converter.convert_vector(descriptor.transform.rotation);
            transform.scale = converter.convert_vector(descriptor.transform.scaling);
            transform.update_matrix();

            let model = models.load_or_get(loader, file_name)?;
            objects.push(ObjectInstance::new(transform, model));
        }

        log::info!(
            "Instantiated scene '{}': {} instance(s), {} unique model(s)",
            document.name,
            objects.len(),
            models.len()
        );

        Ok(Self {
            camera: Camera::default(),
            objects,
            models,
        })
    }

    /// Recompute every instance's world matrix from its current fields
    pub fn update(&mut self) {
        for object in &mut self.objects {
            object.update();
        }
    }

    /// Draw all instances, in instantiation order, as one batch
    pub fn draw(&self, backend: &mut dyn RenderBackend) -> BackendResult<()> {
        backend.begin_batch()?;
        for object in &self.objects {
            backend.draw_instance(&object.transform, object.model(), &self.camera)?;
        }
        backend.end_batch()
    }

    /// The instantiated objects, in document order
    pub fn objects(&self) -> &[ObjectInstance] {
        &self.objects
    }

    /// The scene camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the scene camera
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The shared model cache backing this scene's instances
    pub fn model_cache(&self) -> &ModelCache {
        &self.models
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{ModelAsset, ModelError};
    use crate::foundation::math::Vec3;
    use crate::render::HeadlessBackend;
    use crate::scene::document::{ObjectDescriptor, TransformData};
    use std::sync::Arc;

    struct StubLoader;

    impl ModelLoader for StubLoader {
        fn load_model(&self, file_name: &str) -> Result<ModelAsset, ModelError> {
            Ok(ModelAsset::new(file_name, Vec::new(), Vec::new()))
        }
    }

    struct FailingLoader;

    impl ModelLoader for FailingLoader {
        fn load_model(&self, file_name: &str) -> Result<ModelAsset, ModelError> {
            Err(ModelError::NotFound(file_name.to_string()))
        }
    }

    fn descriptor(name: &str, file_name: Option<&str>, translation: Vec3) -> ObjectDescriptor {
        ObjectDescriptor {
            object_type: "MESH".to_string(),
            name: name.to_string(),
            transform: TransformData {
                translation,
                rotation: Vec3::zeros(),
                scaling: Vec3::new(1.0, 1.0, 1.0),
            },
            file_name: file_name.map(str::to_string),
        }
    }

    fn document(objects: Vec<ObjectDescriptor>) -> SceneDocument {
        SceneDocument {
            name: "scene".to_string(),
            objects,
        }
    }

    #[test]
    fn test_translation_converted_to_engine_space() {
        let doc = document(vec![descriptor(
            "cube",
            Some("cube.obj"),
            Vec3::new(1.0, 2.0, 3.0),
        )]);
        let scene = Scene::instantiate(doc, &StubLoader).unwrap();

        assert_eq!(scene.objects().len(), 1);
        assert_eq!(
            scene.objects()[0].transform.translation,
            Vec3::new(1.0, 3.0, 2.0)
        );
    }

    #[test]
    fn test_markers_without_file_name_are_skipped() {
        let doc = document(vec![
            descriptor("marker", None, Vec3::zeros()),
            descriptor("cube", Some("cube.obj"), Vec3::zeros()),
            descriptor("empty", Some(""), Vec3::zeros()),
        ]);
        let scene = Scene::instantiate(doc, &StubLoader).unwrap();
        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.objects()[0].model().source(), "cube.obj");
    }

    #[test]
    fn test_same_file_name_shares_one_asset() {
        let doc = document(vec![
            descriptor("a", Some("cube.obj"), Vec3::zeros()),
            descriptor("b", Some("cube.obj"), Vec3::zeros()),
            descriptor("c", Some("sphere.obj"), Vec3::zeros()),
        ]);
        let scene = Scene::instantiate(doc, &StubLoader).unwrap();

        let objects = scene.objects();
        assert!(Arc::ptr_eq(objects[0].model(), objects[1].model()));
        assert!(!Arc::ptr_eq(objects[0].model(), objects[2].model()));
        assert_eq!(scene.model_cache().len(), 2);
    }

    #[test]
    fn test_scene_is_debug() {
        // Result combinators like unwrap_err need the Ok type to be Debug
        let scene = Scene::instantiate(document(Vec::new()), &StubLoader).unwrap();
        let rendered = format!("{scene:?}");
        assert!(rendered.contains("Scene"));
    }

    #[test]
    fn test_asset_failure_aborts_load() {
        let doc = document(vec![
            descriptor("a", Some("cube.obj"), Vec3::zeros()),
            descriptor("b", Some("ghost.obj"), Vec3::zeros()),
        ]);
        let err = Scene::instantiate(doc, &FailingLoader).unwrap_err();
        assert!(matches!(err, LoadError::AssetLoad(_)));
    }

    #[test]
    fn test_draw_preserves_document_order() {
        let doc = document(vec![
            descriptor("first", Some("a.obj"), Vec3::new(1.0, 0.0, 0.0)),
            descriptor("second", Some("b.obj"), Vec3::new(2.0, 0.0, 0.0)),
            descriptor("third", Some("a.obj"), Vec3::new(3.0, 0.0, 0.0)),
        ]);
        let mut scene = Scene::instantiate(doc, &StubLoader).unwrap();
        scene.update();

        let mut backend = HeadlessBackend::new();
        scene.draw(&mut backend).unwrap();

        let drawn: Vec<&str> = backend.draws().iter().map(|d| d.model.as_str()).collect();
        assert_eq!(drawn, vec!["a.obj", "b.obj", "a.obj"]);
        assert_eq!(backend.batches_submitted(), 1);
    }

    #[test]
    fn test_update_then_draw_leaves_models_untouched() {
        let doc = document(vec![descriptor("cube", Some("cube.obj"), Vec3::zeros())]);
        let mut scene = Scene::instantiate(doc, &StubLoader).unwrap();
        let model_before = Arc::clone(scene.objects()[0].model());

        scene.update();
        let mut backend = HeadlessBackend::new();
        scene.draw(&mut backend).unwrap();

        assert!(Arc::ptr_eq(&model_before, scene.objects()[0].model()));
    }

    #[test]
    fn test_end_to_end_from_file() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scene.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "name": "scene",
                "objects": [{{
                    "type": "MESH",
                    "file_name": "cube.obj",
                    "transform": {{
                        "translation": [1.0, 2.0, 3.0],
                        "rotation": [0.0, 0.0, 0.0],
                        "scaling": [1.0, 1.0, 1.0]
                    }}
                }}]
            }}"#
        )
        .unwrap();

        let config = SceneConfig {
            scene_path: path.to_str().unwrap().to_string(),
            expected_name: "scene".to_string(),
        };
        let scene = Scene::load(&config, &StubLoader).unwrap();

        assert_eq!(scene.objects().len(), 1);
        assert_eq!(
            scene.objects()[0].transform.translation,
            Vec3::new(1.0, 3.0, 2.0)
        );
    }
}
