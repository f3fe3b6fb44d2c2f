//! Layer map input types.

use serde::{Deserialize, Serialize};

/// Parent sentinel for layers attached directly to the root bone.
pub const ROOT_NAME: &str = "root";

/// Fractional pivot inside a layer image (0.0 to 1.0 on each axis).
///
/// Carried through decoding but not yet applied to attachment placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

impl Default for Pivot {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// One flattened image layer of a character.
///
/// # Examples
///
/// ```
/// use rigsynth::models::LayerSpec;
///
/// let layer: LayerSpec = serde_json::from_str(r#"{
///     "name": "head",
///     "file": "parts/head.png",
///     "type": "head",
///     "parent": "body",
///     "pivot": {"x": 0.5, "y": 0.9}
/// }"#).unwrap();
/// assert_eq!(layer.parent, "body");
/// assert_eq!(layer.slot_name(), "head_slot");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Unique layer name; becomes the bone and attachment name
    pub name: String,
    /// Image asset path (empty means no art yet)
    #[serde(default)]
    pub file: String,
    /// Free-form part tag (e.g. "head", "arm")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Parent layer name, or `"root"`
    #[serde(default = "default_parent")]
    pub parent: String,
    #[serde(default)]
    pub pivot: Pivot,
}

fn default_parent() -> String {
    ROOT_NAME.to_string()
}

impl LayerSpec {
    /// Slot name bound to this layer.
    pub fn slot_name(&self) -> String {
        slot_name(&self.name)
    }

    /// Whether this layer is the root of the rig.
    pub fn is_root(&self) -> bool {
        self.name == ROOT_NAME
    }
}

/// Slot name for a layer name: `"{name}_slot"`.
pub fn slot_name(layer: &str) -> String {
    format!("{}_slot", layer)
}

/// Breathing sub-motion: a vertical scale pulse on one bone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleBreathing {
    pub target: String,
    #[serde(default = "default_breathing_scale")]
    pub scale_y: f64,
    #[serde(default = "default_breathing_period")]
    pub period: f64,
}

impl IdleBreathing {
    pub const DEFAULT_SCALE_Y: f64 = 0.02;
    pub const DEFAULT_PERIOD: f64 = 2.0;

    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scale_y: Self::DEFAULT_SCALE_Y,
            period: Self::DEFAULT_PERIOD,
        }
    }

    /// `period` when finite and positive, otherwise the default.
    pub fn effective_period(&self) -> f64 {
        valid_period(self.period).unwrap_or(Self::DEFAULT_PERIOD)
    }
}

/// `Some(period)` when it can drive keyframe times.
pub fn valid_period(period: f64) -> Option<f64> {
    (period.is_finite() && period > 0.0).then_some(period)
}

fn default_breathing_scale() -> f64 {
    IdleBreathing::DEFAULT_SCALE_Y
}

fn default_breathing_period() -> f64 {
    IdleBreathing::DEFAULT_PERIOD
}

/// Head swing sub-motion: a small rotation oscillation on one bone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleHeadSwing {
    pub target: String,
    #[serde(default = "default_swing_degrees")]
    pub rot_deg: f64,
    #[serde(default = "default_swing_period")]
    pub period: f64,
}

impl IdleHeadSwing {
    pub const DEFAULT_ROT_DEG: f64 = 3.0;
    pub const DEFAULT_PERIOD: f64 = 2.4;

    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            rot_deg: Self::DEFAULT_ROT_DEG,
            period: Self::DEFAULT_PERIOD,
        }
    }

    /// `period` when finite and positive, otherwise the default.
    pub fn effective_period(&self) -> f64 {
        valid_period(self.period).unwrap_or(Self::DEFAULT_PERIOD)
    }
}

fn default_swing_degrees() -> f64 {
    IdleHeadSwing::DEFAULT_ROT_DEG
}

fn default_swing_period() -> f64 {
    IdleHeadSwing::DEFAULT_PERIOD
}

/// Idle animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleAnim {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breathing: Option<IdleBreathing>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub head_swing: Option<IdleHeadSwing>,
}

impl Default for IdleAnim {
    fn default() -> Self {
        Self { enable: true, breathing: None, head_swing: None }
    }
}

impl IdleAnim {
    /// Returns whether the idle animation would produce any track.
    pub fn has_motion(&self) -> bool {
        self.enable && (self.breathing.is_some() || self.head_swing.is_some())
    }
}

/// Hit-flash configuration. Missing fields fall back to synthesis defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitFlashSpec {
    /// Accepted for forward compatibility; the hit flash is always emitted.
    #[serde(default = "default_true")]
    pub enable: bool,
    /// Total flash length in seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration: Option<f64>,
    /// Per-slot start offset in seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stagger: Option<f64>,
    /// Mid-flash dimming (clamped to 0.1..=0.95)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub intensity: Option<f64>,
}

fn default_true() -> bool {
    true
}

/// Animation configurations keyed by animation name.
///
/// Names other than `idle` and `hitFlash` are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpecs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub idle: Option<IdleAnim>,
    #[serde(rename = "hitFlash", skip_serializing_if = "Option::is_none", default)]
    pub hit_flash: Option<HitFlashSpec>,
}

/// The full declarative input: character id, ordered layers and animations.
///
/// Layer order is significant: it is bone/slot emission order and the
/// hit-flash stagger order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerMap {
    pub character_id: String,
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub animations: AnimationSpecs,
}

impl LayerMap {
    /// Returns whether a layer with this name exists.
    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l.name == name)
    }

    /// Returns the enabled idle configuration, if any.
    pub fn idle(&self) -> Option<&IdleAnim> {
        self.animations.idle.as_ref().filter(|idle| idle.enable)
    }

    /// `(name, type)` pairs in layer order.
    pub fn name_type_pairs(&self) -> Vec<(&str, &str)> {
        self.layers.iter().map(|l| (l.name.as_str(), l.kind.as_str())).collect()
    }
}
