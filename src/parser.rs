//! Layer map decoding from YAML, JSON and JSON5
//!
//! Decoding is all-or-nothing: a malformed document is a schema error and no
//! synthesis happens. Unknown fields are ignored so newer authoring tools can
//! add settings without breaking older builds.

use crate::models::LayerMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Source format of a layer map document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Json5,
}

impl Format {
    /// Pick a format from a file extension (`.yaml`, `.yml`, `.json`, `.json5`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(ext) if ext == "yaml" || ext == "yml" => Some(Format::Yaml),
            Some(ext) if ext == "json" => Some(Format::Json),
            Some(ext) if ext == "json5" => Some(Format::Json5),
            _ => None,
        }
    }
}

/// Error type for layer map decoding failures.
#[derive(Debug, Error)]
pub enum LayerMapError {
    /// File could not be read
    #[error("cannot read layer map: {0}")]
    Io(#[from] std::io::Error),
    /// YAML syntax or schema error
    #[error("invalid layer map (yaml): {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON syntax or schema error
    #[error("invalid layer map (json): {0}")]
    Json(#[from] serde_json::Error),
    /// JSON5 syntax or schema error
    #[error("invalid layer map (json5): {0}")]
    Json5(#[from] json5::Error),
    /// File extension is not one of the supported formats
    #[error("unsupported layer map extension for '{0}', expected .yaml, .yml, .json or .json5")]
    UnsupportedFormat(String),
}

/// Decode a layer map from text in the given format.
///
/// # Examples
///
/// ```
/// use rigsynth::parser::{parse_layer_map, Format};
///
/// let map = parse_layer_map(r#"
/// characterId: hero
/// layers:
///   - { name: body, file: body.png, type: body, parent: root, pivot: { x: 0.5, y: 0.5 } }
/// animations: {}
/// "#, Format::Yaml).unwrap();
/// assert_eq!(map.layers.len(), 1);
/// ```
pub fn parse_layer_map(text: &str, format: Format) -> Result<LayerMap, LayerMapError> {
    let map = match format {
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Json => serde_json::from_str(text)?,
        Format::Json5 => json5::from_str(text)?,
    };
    Ok(map)
}

/// Read and decode a layer map file, choosing the format by extension.
pub fn load_layer_map(path: &Path) -> Result<LayerMap, LayerMapError> {
    let format = Format::from_path(path)
        .ok_or_else(|| LayerMapError::UnsupportedFormat(path.display().to_string()))?;
    let text = fs::read_to_string(path)?;
    let map = parse_layer_map(&text, format)?;
    tracing::debug!(
        "Loaded layer map '{}' ({} layers) from {}",
        map.character_id,
        map.layers.len(),
        path.display()
    );
    Ok(map)
}
