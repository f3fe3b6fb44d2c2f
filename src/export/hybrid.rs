//! Hybrid manifest export: skeleton plus reference video.
//!
//! ```json
//! {
//!   "type": "hybrid",
//!   "skeleton": { ... },
//!   "video": "fx/hit.webm",
//!   "runtimeSpecMeta": { "layers": 5 },
//!   "sync": { "offsetMs": 0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::export::{to_json, ExportOptions, Exporter, Result};
use crate::models::SkeletonDocument;

/// Manifest type tag.
pub const HYBRID_TYPE: &str = "hybrid";

/// Layer statistics carried alongside the skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSpecMeta {
    pub layers: usize,
}

/// Playback alignment between skeleton and video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncInfo {
    pub offset_ms: i64,
}

/// A skeleton paired with the video it plays against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridManifest {
    #[serde(rename = "type")]
    pub kind: String,
    pub skeleton: SkeletonDocument,
    pub video: String,
    pub runtime_spec_meta: RuntimeSpecMeta,
    pub sync: SyncInfo,
}

impl HybridManifest {
    /// Pair `skeleton` with `video`; the layer count is the slot count.
    pub fn new(skeleton: SkeletonDocument, video: impl Into<String>, offset_ms: i64) -> Self {
        let layers = skeleton.slots.len();
        Self {
            kind: HYBRID_TYPE.to_string(),
            skeleton,
            video: video.into(),
            runtime_spec_meta: RuntimeSpecMeta { layers },
            sync: SyncInfo { offset_ms },
        }
    }
}

/// Exporter wrapping documents in a [`HybridManifest`].
#[derive(Debug, Clone)]
pub struct HybridExporter {
    video: String,
    offset_ms: i64,
}

impl HybridExporter {
    pub fn new(video: impl Into<String>) -> Self {
        Self { video: video.into(), offset_ms: 0 }
    }

    /// Set the playback offset between skeleton and video.
    pub fn with_offset_ms(mut self, offset_ms: i64) -> Self {
        self.offset_ms = offset_ms;
        self
    }

    pub fn manifest(&self, document: &SkeletonDocument) -> HybridManifest {
        HybridManifest::new(document.clone(), &self.video, self.offset_ms)
    }
}

impl Exporter for HybridExporter {
    fn export_to_string(
        &self,
        document: &SkeletonDocument,
        options: &ExportOptions,
    ) -> Result<String> {
        to_json(&self.manifest(document), options.pretty)
    }

    fn format_name(&self) -> &'static str {
        "hybrid"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
