//! # Scene Engine
//!
//! A scene loading and instantiation library for real-time 3D applications.
//!
//! ## Features
//!
//! - **Declarative Scenes**: Levels authored as JSON documents
//! - **Schema Validation**: Fail-fast validation with typed errors
//! - **Coordinate Conversion**: Authoring-tool to engine axis conventions
//! - **Model Caching**: Shared model assets deduplicated by file name
//! - **Backend Agnostic**: Rendering behind a trait seam
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SceneConfig::default();
//!     let loader = ObjModelLoader::new("Resources/models");
//!     let mut scene = Scene::load(&config, &loader)?;
//!
//!     let mut backend = HeadlessBackend::new();
//!     scene.update();
//!     scene.draw(&mut backend)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{ModelAsset, ModelCache, ModelError, ModelLoader, ObjModelLoader},
        config::{Config, ConfigError},
        foundation::math::{Mat4, Vec3},
        render::{Camera, HeadlessBackend, RenderBackend},
        scene::{
            LoadError, ObjectDescriptor, ObjectInstance, Scene, SceneConfig, SceneDocument,
            WorldTransform,
        },
    };
}
