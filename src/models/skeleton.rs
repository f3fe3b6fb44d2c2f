//! Output skeleton document types.
//!
//! The serialized shape is what Spine-style runtimes and the hybrid manifest
//! exporter consume: `skeleton`, `bones`, `slots`, `skins`, `animations`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::track::Animation;

/// Runtime format version written into the header.
pub const SPINE_VERSION: &str = "4.1";

/// Name of the only skin produced.
pub const DEFAULT_SKIN: &str = "default";

/// Static document header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonHeader {
    pub hash: String,
    pub spine: String,
    pub width: u32,
    pub height: u32,
}

impl Default for SkeletonHeader {
    fn default() -> Self {
        Self { hash: String::new(), spine: SPINE_VERSION.to_string(), width: 0, height: 0 }
    }
}

/// A transform node. Only the root bone has no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<String>,
}

impl Bone {
    /// Create a parentless bone.
    pub fn root(name: impl Into<String>) -> Self {
        Self { name: name.into(), parent: None }
    }

    /// Create a bone attached to `parent`.
    pub fn child(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self { name: name.into(), parent: Some(parent.into()) }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// An attachment point bound to one bone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub bone: String,
    pub attachment: String,
}

/// Placement and size of a region attachment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentGeometry {
    pub x: f64,
    pub y: f64,
    pub width: u32,
    pub height: u32,
}

impl AttachmentGeometry {
    /// Geometry at the origin with the given size.
    pub fn sized(width: u32, height: u32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }
}

/// slot name -> attachment name -> geometry
pub type Skin = BTreeMap<String, BTreeMap<String, AttachmentGeometry>>;

/// The complete synthesized skeleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkeletonDocument {
    pub skeleton: SkeletonHeader,
    pub bones: Vec<Bone>,
    pub slots: Vec<Slot>,
    /// skin name -> skin (only `default` is produced)
    pub skins: BTreeMap<String, Skin>,
    pub animations: BTreeMap<String, Animation>,
}

impl SkeletonDocument {
    /// Look up a bone by name.
    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// The `default` skin, if present.
    pub fn default_skin(&self) -> Option<&Skin> {
        self.skins.get(DEFAULT_SKIN)
    }

    /// Serialize to JSON text.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
