//! Scene document parsing and validation
//!
//! Reads an authored JSON level document, validates its shape, and maps it
//! into typed object descriptors. Validation is fail-fast: the first
//! violation aborts the load and nothing partial is returned.
//!
//! Filtering happens here, permanently: entries flagged `disabled` and
//! entries whose tag is not `"MESH"` are dropped at parse time and never
//! reach instantiation.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use super::LoadError;
use crate::foundation::math::Vec3;

/// Tag value of instantiable object entries
const MESH_TAG: &str = "MESH";

/// Translation, rotation, and scaling as authored
///
/// Values stay in authoring space; the axis conversion to engine space
/// happens during instantiation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformData {
    /// Authored translation
    pub translation: Vec3,
    /// Authored Euler rotation
    pub rotation: Vec3,
    /// Authored scale factors
    pub scaling: Vec3,
}

/// One parsed scene object, immutable once constructed
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDescriptor {
    /// The entry's tag (always `"MESH"` after filtering)
    pub object_type: String,
    /// Informational label; empty when the document omits it
    pub name: String,
    /// Authoring-space transform
    pub transform: TransformData,
    /// Referenced model file; `None` marks a transform-only entry that
    /// produces no instance
    pub file_name: Option<String>,
}

/// A validated scene document
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDocument {
    /// The document's scene identifier
    pub name: String,
    /// Mesh descriptors in document order
    pub objects: Vec<ObjectDescriptor>,
}

/// Wire shape of a `transform` block
#[derive(Deserialize)]
struct RawTransform {
    translation: [f32; 3],
    rotation: [f32; 3],
    scaling: [f32; 3],
}

impl SceneDocument {
    /// Load and validate a scene document
    ///
    /// # Arguments
    /// * `path` - Path to the JSON document
    /// * `expected_name` - Required value of the top-level `name` field
    ///
    /// # Errors
    /// * [`LoadError::FileNotFound`] when the path cannot be opened
    /// * [`LoadError::MalformedDocument`] when the file is not valid JSON or
    ///   the root is not an object
    /// * [`LoadError::SchemaViolation`] when a required field is missing,
    ///   has the wrong type, or `name` does not match `expected_name`
    pub fn load(path: impl AsRef<Path>, expected_name: &str) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let root: Value = serde_json::from_str(&text)
            .map_err(|e| LoadError::MalformedDocument(e.to_string()))?;
        let root = root
            .as_object()
            .ok_or_else(|| LoadError::MalformedDocument("root is not an object".to_string()))?;

        let name = root
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                LoadError::SchemaViolation("missing or non-string top-level 'name'".to_string())
            })?;
        if name != expected_name {
            return Err(LoadError::SchemaViolation(format!(
                "scene name '{name}' does not match expected '{expected_name}'"
            )));
        }

        let mut objects = Vec::new();
        if let Some(entries) = root.get("objects") {
            let entries = entries.as_array().ok_or_else(|| {
                LoadError::SchemaViolation("'objects' is not an array".to_string())
            })?;
            for entry in entries {
                if let Some(descriptor) = parse_entry(entry)? {
                    objects.push(descriptor);
                }
            }
        }

        log::info!("Parsed scene '{}': {} mesh object(s)", name, objects.len());
        Ok(Self {
            name: name.to_string(),
            objects,
        })
    }
}

/// Parse one entry of the `objects` array
///
/// Returns `None` for entries that are filtered out (disabled, or a tag
/// other than `"MESH"`).
fn parse_entry(entry: &Value) -> Result<Option<ObjectDescriptor>, LoadError> {
    let fields = entry.as_object().ok_or_else(|| {
        LoadError::SchemaViolation("object entry is not an object".to_string())
    })?;

    // Disabled entries are dropped before anything else is required of them
    if fields
        .get("disabled")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return Ok(None);
    }

    let object_type = fields.get("type").and_then(Value::as_str).ok_or_else(|| {
        LoadError::SchemaViolation("object entry lacks a 'type' field".to_string())
    })?;
    if object_type != MESH_TAG {
        // Unknown tags are not an error, just not instantiable
        return Ok(None);
    }

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let transform = fields.get("transform").cloned().ok_or_else(|| {
        LoadError::SchemaViolation(format!("mesh entry '{name}' lacks a 'transform'"))
    })?;
    let raw: RawTransform = serde_json::from_value(transform).map_err(|e| {
        LoadError::SchemaViolation(format!("mesh entry '{name}' has a bad transform: {e}"))
    })?;

    // Optional, but when present it must be a string
    let file_name = match fields.get("file_name") {
        None => None,
        Some(value) => Some(
            value
                .as_str()
                .ok_or_else(|| {
                    LoadError::SchemaViolation(format!(
                        "mesh entry '{name}' has a non-string 'file_name'"
                    ))
                })?
                .to_string(),
        ),
    };

    Ok(Some(ObjectDescriptor {
        object_type: object_type.to_string(),
        name: name.to_string(),
        transform: TransformData {
            translation: Vec3::from(raw.translation),
            rotation: Vec3::from(raw.rotation),
            scaling: Vec3::from(raw.scaling),
        },
        file_name,
    }))
}
