//! Keyframe and timeline types for synthesized animations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Interpolation curve between a keyframe and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    /// Constant speed
    #[default]
    Linear,
    /// Hold value until the next keyframe
    Stepped,
    /// Slow start, fast end
    CubicIn,
    /// Fast start, slow end
    CubicOut,
    /// Slow start and end
    CubicInOut,
}

impl Curve {
    /// Curve identifier as written in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::Stepped => "stepped",
            Curve::CubicIn => "cubicIn",
            Curve::CubicOut => "cubicOut",
            Curve::CubicInOut => "cubicInOut",
        }
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Curve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Curve::Linear),
            "stepped" => Ok(Curve::Stepped),
            "cubicIn" => Ok(Curve::CubicIn),
            "cubicOut" => Ok(Curve::CubicOut),
            "cubicInOut" => Ok(Curve::CubicInOut),
            other => Err(format!("unknown curve '{}'", other)),
        }
    }
}

/// Mutable curve access shared by every keyframe kind, used by the easing pass.
pub trait Keyframe {
    fn curve_mut(&mut self) -> &mut Option<Curve>;
}

/// Bone rotation sample, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotateKey {
    pub time: f64,
    pub angle: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub curve: Option<Curve>,
}

impl RotateKey {
    pub fn new(time: f64, angle: f64) -> Self {
        Self { time, angle, curve: None }
    }
}

/// Bone scale sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleKey {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub curve: Option<Curve>,
}

impl ScaleKey {
    pub fn new(time: f64, x: f64, y: f64) -> Self {
        Self { time, x, y, curve: None }
    }
}

/// Slot tint sample. `color` is 8 hex digits, lowercase, no `#`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub time: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub curve: Option<Curve>,
}

impl ColorKey {
    pub fn new(time: f64, color: impl Into<String>) -> Self {
        Self { time, color: color.into(), curve: None }
    }
}

macro_rules! impl_keyframe {
    ($($ty:ty),*) => {
        $(
            impl Keyframe for $ty {
                fn curve_mut(&mut self) -> &mut Option<Curve> {
                    &mut self.curve
                }
            }
        )*
    };
}

impl_keyframe!(RotateKey, ScaleKey, ColorKey);

/// Property tracks for one bone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoneTimeline {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rotate: Vec<RotateKey>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub scale: Vec<ScaleKey>,
}

/// Property tracks for one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotTimeline {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub color: Vec<ColorKey>,
}

/// One named animation: bone tracks and slot tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub bones: BTreeMap<String, BoneTimeline>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub slots: BTreeMap<String, SlotTimeline>,
}

impl Animation {
    /// Timeline for `bone`, created on first use.
    pub fn bone_mut(&mut self, bone: &str) -> &mut BoneTimeline {
        self.bones.entry(bone.to_string()).or_default()
    }
}
