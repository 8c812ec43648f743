//! Model asset representation
//!
//! A `ModelAsset` is the loaded, renderer-ready form of a mesh file. It is
//! immutable after load; the update/draw loop only ever reads it.

/// A single mesh vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Surface normal
    pub normal: [f32; 3],
    /// Texture coordinate
    pub tex_coord: [f32; 2],
}

/// A loaded model asset, identified by its source file name
#[derive(Debug, Clone)]
pub struct ModelAsset {
    source: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl ModelAsset {
    /// Create a model asset from mesh data
    pub fn new(source: impl Into<String>, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            source: source.into(),
            vertices,
            indices,
        }
    }

    /// File name this asset was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Vertex data
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Index data (triangle list)
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
