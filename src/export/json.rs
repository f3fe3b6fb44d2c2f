//! Plain skeleton JSON export.

use crate::export::{to_json, ExportOptions, Exporter, Result};
use crate::models::SkeletonDocument;
use std::path::Path;

/// Writes the skeleton document unchanged.
#[derive(Debug, Default)]
pub struct SkeletonJsonExporter;

impl SkeletonJsonExporter {
    /// Create a new skeleton exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for SkeletonJsonExporter {
    fn export_to_string(
        &self,
        document: &SkeletonDocument,
        options: &ExportOptions,
    ) -> Result<String> {
        to_json(document, options.pretty)
    }

    fn format_name(&self) -> &'static str {
        "skeleton"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Export a skeleton document to a JSON file.
pub fn export_skeleton(
    document: &SkeletonDocument,
    output_path: &Path,
    pretty: bool,
) -> Result<()> {
    let options = ExportOptions { pretty };
    SkeletonJsonExporter::new().export(document, output_path, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bone, SkeletonDocument};
    use tempfile::TempDir;

    fn document() -> SkeletonDocument {
        SkeletonDocument { bones: vec![Bone::root("root")], ..Default::default() }
    }

    #[test]
    fn test_export_to_string_compact() {
        let json = SkeletonJsonExporter::new()
            .export_to_string(&document(), &ExportOptions { pretty: false })
            .unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with("{\"skeleton\":{\"hash\":\"\",\"spine\":\"4.1\""));
    }

    #[test]
    fn test_export_to_file_roundtrip() {
        let temp = TempDir::new().unwrap();
        let output_path = temp.path().join("hero.json");

        export_skeleton(&document(), &output_path, true).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: SkeletonDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, document());
    }

    #[test]
    fn test_format_metadata() {
        let exporter = SkeletonJsonExporter::new();
        assert_eq!(exporter.format_name(), "skeleton");
        assert_eq!(exporter.extension(), "json");
    }
}
