//! Rendering interface
//!
//! The engine core never talks to a GPU directly; it issues batched draw
//! calls through the [`RenderBackend`] trait. A headless implementation is
//! provided for tests and tooling.

mod backend;
mod camera;

pub use backend::{BackendResult, DrawRecord, HeadlessBackend, RenderBackend, RenderError};
pub use camera::Camera;
