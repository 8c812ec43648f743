//! Scene loading and instantiation
//!
//! A scene travels through two stages, each evaluated once per load:
//!
//! ```text
//! JSON document
//!      ↓  parse + validate
//! SceneDocument (descriptors, authoring space)
//!      ↓  instantiate (filter, convert axes, resolve models)
//! Scene (instances, engine space)
//! ```
//!
//! The resulting [`Scene`] is then driven every frame through
//! [`Scene::update`] and [`Scene::draw`]. Any validation or asset failure
//! aborts the whole load; there is no partial scene.

mod coordinates;
mod document;
mod instance;
mod scene;
mod world_transform;

pub use coordinates::{CoordinateConverter, CoordinateSystem};
pub use document::{ObjectDescriptor, SceneDocument, TransformData};
pub use instance::ObjectInstance;
pub use scene::Scene;
pub use world_transform::WorldTransform;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::ModelError;

/// Scene loading errors
///
/// All variants are fatal to the load: nothing is retried and no partial
/// scene is constructed. Callers decide whether to halt or report.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The scene document could not be opened
    #[error("Scene file not found: {0}")]
    FileNotFound(String),

    /// The file is not a valid structured document
    #[error("Malformed scene document: {0}")]
    MalformedDocument(String),

    /// A required field is missing or has the wrong shape or value
    #[error("Scene schema violation: {0}")]
    SchemaViolation(String),

    /// A referenced model asset failed to load
    #[error("Asset load failure: {0}")]
    AssetLoad(#[from] ModelError),
}

/// Scene loading configuration
///
/// Replaces the hard-coded document path with an explicit parameter so the
/// same pipeline can serve any level file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Path to the scene document
    pub scene_path: String,
    /// Required value of the document's top-level `name` field
    pub expected_name: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene_path: "Resources/levels/scene.json".to_string(),
            expected_name: "scene".to_string(),
        }
    }
}

impl crate::config::Config for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!(config.scene_path, "Resources/levels/scene.json");
        assert_eq!(config.expected_name, "scene");
    }

    #[test]
    fn test_config_round_trip_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scene.toml");
        let path = path.to_str().unwrap();

        let config = SceneConfig {
            scene_path: "levels/test.json".to_string(),
            expected_name: "test".to_string(),
        };
        config.save_to_file(path).unwrap();

        let loaded = SceneConfig::load_from_file(path).unwrap();
        assert_eq!(loaded.scene_path, config.scene_path);
        assert_eq!(loaded.expected_name, config.expected_name);
    }

    #[test]
    fn test_config_unsupported_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scene.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "scene_path = x").unwrap();

        let result = SceneConfig::load_from_file(path.to_str().unwrap());
        assert!(result.is_err());
    }
}
