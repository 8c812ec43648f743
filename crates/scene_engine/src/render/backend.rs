//! Backend abstraction for the rendering system
//!
//! Draw submission follows a begin/draw/end batch protocol: the scene opens
//! a batch, issues one draw per object instance, then closes the batch.

use thiserror::Error;

use super::camera::Camera;
use crate::assets::ModelAsset;
use crate::foundation::math::Vec3;
use crate::scene::WorldTransform;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Batch protocol violation: draw or end without an open batch
    #[error("No active draw batch")]
    BatchNotActive,

    /// Batch protocol violation: begin while a batch is already open
    #[error("Draw batch already active")]
    BatchAlreadyActive,

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Rendering backend trait
///
/// Abstracts over concrete renderers so the scene loop can submit draw
/// calls without knowing about GPU details.
pub trait RenderBackend {
    /// Begin a draw batch
    fn begin_batch(&mut self) -> BackendResult<()>;

    /// Draw one object instance with the given transform, model, and camera
    fn draw_instance(
        &mut self,
        transform: &WorldTransform,
        model: &ModelAsset,
        camera: &Camera,
    ) -> BackendResult<()>;

    /// End the current draw batch and submit it
    fn end_batch(&mut self) -> BackendResult<()>;
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    /// Source file name of the drawn model
    pub model: String,
    /// Engine-space translation of the drawn instance
    pub translation: Vec3,
}

/// Backend that records draw calls instead of rendering them
///
/// Used by tests and headless tooling to observe exactly what the scene
/// submits each frame.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    draws: Vec<DrawRecord>,
    in_batch: bool,
    batches_submitted: usize,
}

impl HeadlessBackend {
    /// Create a new headless backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls recorded so far, in submission order
    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    /// Number of completed begin/end batch pairs
    pub fn batches_submitted(&self) -> usize {
        self.batches_submitted
    }

    /// Forget all recorded draws
    pub fn reset(&mut self) {
        self.draws.clear();
        self.batches_submitted = 0;
    }
}

impl RenderBackend for HeadlessBackend {
    fn begin_batch(&mut self) -> BackendResult<()> {
        if self.in_batch {
            return Err(RenderError::BatchAlreadyActive);
        }
        self.in_batch = true;
        Ok(())
    }

    fn draw_instance(
        &mut self,
        transform: &WorldTransform,
        model: &ModelAsset,
        _camera: &Camera,
    ) -> BackendResult<()> {
        if !self.in_batch {
            return Err(RenderError::BatchNotActive);
        }
        log::trace!(
            "draw {} at ({}, {}, {})",
            model.source(),
            transform.translation.x,
            transform.translation.y,
            transform.translation.z
        );
        self.draws.push(DrawRecord {
            model: model.source().to_string(),
            translation: transform.translation,
        });
        Ok(())
    }

    fn end_batch(&mut self) -> BackendResult<()> {
        if !self.in_batch {
            return Err(RenderError::BatchNotActive);
        }
        self.in_batch = false;
        self.batches_submitted += 1;
        Ok(())
    }
}
