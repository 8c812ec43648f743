//! Wavefront OBJ model loader
//!
//! Resolves scene-document file names against a base directory and parses
//! them as triangle meshes. Faces with more than three corners are fan
//! triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::model::{ModelAsset, Vertex};
use super::{ModelError, ModelLoader};

/// OBJ file loader rooted at a model directory
pub struct ObjModelLoader {
    base_dir: PathBuf,
}

impl ObjModelLoader {
    /// Create a loader that resolves file names relative to `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    fn parse(file_name: &str, path: &Path) -> Result<ModelAsset, ModelError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ModelError::NotFound(file_name.to_string()),
            _ => ModelError::Io(e),
        })?;
        let reader = BufReader::new(file);

        let invalid = |reason: &str| ModelError::InvalidFormat {
            file: file_name.to_string(),
            reason: reason.to_string(),
        };

        let mut positions: Vec<[f32; 3]> = Vec::new();
        let mut normals: Vec<[f32; 3]> = Vec::new();
        let mut tex_coords: Vec<[f32; 2]> = Vec::new();
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(keyword) = parts.next() else {
                continue;
            };
            let rest: Vec<&str> = parts.collect();

            match keyword {
                "v" => positions.push(parse_vec3(&rest).ok_or_else(|| invalid("bad vertex"))?),
                "vn" => normals.push(parse_vec3(&rest).ok_or_else(|| invalid("bad normal"))?),
                "vt" => tex_coords.push(parse_vec2(&rest).ok_or_else(|| invalid("bad tex coord"))?),
                "f" => {
                    if rest.len() < 3 {
                        return Err(invalid("face with fewer than 3 corners"));
                    }
                    let mut corners = Vec::with_capacity(rest.len());
                    for corner in &rest {
                        let vertex =
                            parse_corner(corner, &positions, &normals, &tex_coords)
                                .ok_or_else(|| invalid("bad face index"))?;
                        vertices.push(vertex);
                        corners.push((vertices.len() - 1) as u32);
                    }
                    // Fan triangulation
                    for i in 1..corners.len() - 1 {
                        indices.push(corners[0]);
                        indices.push(corners[i]);
                        indices.push(corners[i + 1]);
                    }
                }
                _ => {
                    // Ignore other keywords (materials, groups, smoothing)
                }
            }
        }

        if vertices.is_empty() {
            return Err(invalid("no geometry"));
        }

        log::debug!(
            "Loaded OBJ '{}': {} vertices, {} triangles",
            file_name,
            vertices.len(),
            indices.len() / 3
        );

        Ok(ModelAsset::new(file_name, vertices, indices))
    }
}

impl ModelLoader for ObjModelLoader {
    fn load_model(&self, file_name: &str) -> Result<ModelAsset, ModelError> {
        let path = self.resolve(file_name);
        Self::parse(file_name, &path)
    }
}

fn parse_vec3(parts: &[&str]) -> Option<[f32; 3]> {
    if parts.len() < 3 {
        return None;
    }
    Some([
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
    ])
}

fn parse_vec2(parts: &[&str]) -> Option<[f32; 2]> {
    if parts.len() < 2 {
        return None;
    }
    Some([parts[0].parse().ok()?, parts[1].parse().ok()?])
}

/// Parse one `v/vt/vn` face corner into a vertex (OBJ indices are 1-based)
fn parse_corner(
    corner: &str,
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    tex_coords: &[[f32; 2]],
) -> Option<Vertex> {
    let mut fields = corner.split('/');

    let pos_idx: usize = fields.next()?.parse().ok()?;
    let position = *positions.get(pos_idx.checked_sub(1)?)?;

    // An absent field gets a default; a present field must be a valid
    // 1-based index
    let tex_coord = match fields.next().filter(|s| !s.is_empty()) {
        Some(field) => {
            let idx = field.parse::<usize>().ok()?.checked_sub(1)?;
            *tex_coords.get(idx)?
        }
        None => [0.0, 0.0],
    };

    let normal = match fields.next().filter(|s| !s.is_empty()) {
        Some(field) => {
            let idx = field.parse::<usize>().ok()?.checked_sub(1)?;
            *normals.get(idx)?
        }
        None => [0.0, 1.0, 0.0],
    };

    Some(Vertex {
        position,
        normal,
        tex_coord,
    })
}
