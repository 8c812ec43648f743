//! Model asset loading and caching

pub mod model;
pub mod model_cache;
pub mod obj_loader;

pub use model::{ModelAsset, Vertex};
pub use model_cache::ModelCache;
pub use obj_loader::ObjModelLoader;

use thiserror::Error;

/// Model loading errors
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model file not found
    #[error("Model not found: {0}")]
    NotFound(String),

    /// IO error while reading the model file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as a model
    #[error("Invalid format in {file}: {reason}")]
    InvalidFormat {
        /// The offending file
        file: String,
        /// What went wrong
        reason: String,
    },
}

/// Collaborator seam for resolving model file names into loaded assets
///
/// The scene instantiator only depends on this trait; concrete loaders
/// (OBJ today, anything else tomorrow) live behind it. Tests substitute
/// stub implementations.
pub trait ModelLoader {
    /// Load the model identified by `file_name`
    fn load_model(&self, file_name: &str) -> Result<ModelAsset, ModelError>;
}
