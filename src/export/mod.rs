//! Export formats for synthesized skeletons.
//!
//! # Supported Formats
//!
//! - **Skeleton JSON**: the skeleton document as-is, for Spine-style runtimes
//! - **Hybrid manifest**: the skeleton paired with a reference video and a
//!   sync offset, for players that layer rigged parts over pre-rendered effects
//!
//! # Example
//!
//! ```ignore
//! use rigsynth::export::{ExportOptions, Exporter, HybridExporter};
//!
//! let exporter = HybridExporter::new("fx/hit.webm");
//! exporter.export(&document, Path::new("out/hero.hybrid.json"), &ExportOptions::default())?;
//! ```

pub mod hybrid;
pub mod json;

pub use hybrid::*;
pub use json::*;

use crate::models::SkeletonDocument;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Common error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error during file writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

/// Result alias for export operations.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;

/// Options for export operations.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty print output (with indentation)
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Trait for export format implementations.
pub trait Exporter {
    /// Render the document in this format.
    fn export_to_string(&self, document: &SkeletonDocument, options: &ExportOptions)
        -> Result<String>;

    /// Export the document to the specified path, creating parent directories.
    fn export(
        &self,
        document: &SkeletonDocument,
        output_path: &Path,
        options: &ExportOptions,
    ) -> Result<()> {
        let text = self.export_to_string(document, options)?;
        write_output(output_path, &text)
    }

    /// Get the format name for this exporter.
    fn format_name(&self) -> &'static str;

    /// Get the default file extension for this format.
    fn extension(&self) -> &'static str;
}

/// Serialize any value as JSON text.
pub(crate) fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(json)
}

/// Write text to a file, creating parent directories as needed.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
