//! Model cache for deduplicating loaded model assets
//!
//! Provides a caching layer over a `ModelLoader` so that every scene object
//! referencing the same file name shares one underlying asset. The cache is
//! only mutated during scene instantiation, which is single-threaded, so no
//! interior locking is needed.

use std::collections::HashMap;
use std::sync::Arc;

use super::model::ModelAsset;
use super::{ModelError, ModelLoader};

/// Cache of loaded models keyed by source file name
#[derive(Debug, Default)]
pub struct ModelCache {
    cache: HashMap<String, Arc<ModelAsset>>,
}

impl ModelCache {
    /// Create a new empty model cache
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Resolve `file_name` through the cache, loading on a miss
    ///
    /// # Arguments
    /// * `loader` - The loader used to materialize cache misses
    /// * `file_name` - Model file name, also the cache key
    ///
    /// # Returns
    /// A shared reference to the cached asset
    pub fn load_or_get(
        &mut self,
        loader: &dyn ModelLoader,
        file_name: &str,
    ) -> Result<Arc<ModelAsset>, ModelError> {
        if let Some(asset) = self.cache.get(file_name) {
            log::trace!("Model cache hit: {}", file_name);
            return Ok(Arc::clone(asset));
        }

        log::debug!("Model cache miss, loading: {}", file_name);
        let asset = Arc::new(loader.load_model(file_name)?);
        self.cache
            .insert(file_name.to_string(), Arc::clone(&asset));
        Ok(asset)
    }

    /// Get a cached asset without loading
    pub fn get_cached(&self, file_name: &str) -> Option<Arc<ModelAsset>> {
        self.cache.get(file_name).map(Arc::clone)
    }

    /// Check whether a file name is cached
    pub fn is_cached(&self, file_name: &str) -> bool {
        self.cache.contains_key(file_name)
    }

    /// Number of cached assets
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached assets
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
