//! Procedural animation synthesis
//!
//! Three generators produce keyframe tracks from a layer map:
//!
//! - [`idle`]: breathing scale pulse and head swing rotation
//! - [`hit_flash`]: slot tint flash that sweeps across slots in layer order
//! - [`win_pose`]: fixed celebratory rotations for head and arms
//!
//! Every generated animation then goes through the shared passes:
//! [`easing::apply_default_curves`] fills missing curves, and
//! [`compress::compress_bone_tracks`] drops near-static interior bone keys.

pub mod compress;
pub mod easing;
pub mod hit_flash;
pub mod idle;
pub mod win_pose;

use std::collections::BTreeMap;

use crate::models::{Animation, Curve, LayerMap};

pub use compress::{
    compress_bone_tracks, compress_rotate, compress_scale, CompressionTolerance,
};
pub use easing::apply_default_curves;
pub use hit_flash::{build_hit_flash, mid_tint_channel, HitFlashParams};
pub use idle::build_idle;
pub use win_pose::build_win_pose;

/// Default curve for bone keyframes without an explicit one.
pub const DEFAULT_BONE_CURVE: Curve = Curve::CubicOut;
/// Default curve for slot keyframes without an explicit one.
pub const DEFAULT_SLOT_CURVE: Curve = Curve::Linear;

/// The animations this synthesizer knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Idle,
    HitFlash,
    WinPose,
}

impl AnimationKind {
    /// All kinds in generation order.
    pub const ALL: [AnimationKind; 3] =
        [AnimationKind::Idle, AnimationKind::HitFlash, AnimationKind::WinPose];

    /// Key used in the output `animations` map.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Idle => "idle",
            AnimationKind::HitFlash => "hit_flash",
            AnimationKind::WinPose => "win_pose",
        }
    }

    /// Whether the compression pass applies to this kind.
    fn compressible(&self) -> bool {
        !matches!(self, AnimationKind::HitFlash)
    }
}

impl std::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-invocation synthesis settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    /// Fill missing keyframe curves
    pub apply_easing: bool,
    /// Drop near-static interior bone keyframes
    pub compress: bool,
    pub bone_curve: Curve,
    pub slot_curve: Curve,
    pub tolerance: CompressionTolerance,
    /// Hit-flash values used where the layer map leaves them unset
    pub hit_flash: HitFlashParams,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            apply_easing: true,
            compress: true,
            bone_curve: DEFAULT_BONE_CURVE,
            slot_curve: DEFAULT_SLOT_CURVE,
            tolerance: CompressionTolerance::default(),
            hit_flash: HitFlashParams::default(),
        }
    }
}

/// Generate one animation kind without post-processing.
///
/// Returns `None` when the kind does not apply to this layer map.
pub fn generate(
    kind: AnimationKind,
    layer_map: &LayerMap,
    options: &SynthesisOptions,
) -> Option<Animation> {
    match kind {
        AnimationKind::Idle => build_idle(layer_map),
        AnimationKind::HitFlash => Some(build_hit_flash(layer_map, &options.hit_flash)),
        AnimationKind::WinPose => build_win_pose(layer_map),
    }
}

/// Generate every applicable animation and run the easing and compression passes.
pub fn build_all_animations(
    layer_map: &LayerMap,
    options: &SynthesisOptions,
) -> BTreeMap<String, Animation> {
    let mut animations = BTreeMap::new();

    for kind in AnimationKind::ALL {
        let Some(mut anim) = generate(kind, layer_map, options) else {
            tracing::debug!("Skipping {}: not applicable", kind);
            continue;
        };
        if options.apply_easing {
            apply_default_curves(&mut anim, options.bone_curve, options.slot_curve);
        }
        if options.compress && kind.compressible() {
            let dropped = compress_bone_tracks(&mut anim, &options.tolerance);
            if dropped > 0 {
                tracing::debug!("Compressed {}: dropped {} keyframes", kind, dropped);
            }
        }
        animations.insert(kind.as_str().to_string(), anim);
    }

    animations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IdleAnim, IdleBreathing, LayerSpec};

    fn layer(name: &str) -> LayerSpec {
        LayerSpec {
            name: name.to_string(),
            file: String::new(),
            kind: String::new(),
            parent: "root".to_string(),
            pivot: Default::default(),
        }
    }

    #[test]
    fn test_hit_flash_always_present() {
        let map = LayerMap { layers: vec![layer("body")], ..Default::default() };
        let anims = build_all_animations(&map, &SynthesisOptions::default());
        assert_eq!(anims.keys().collect::<Vec<_>>(), vec!["hit_flash"]);
    }

    #[test]
    fn test_all_kinds_present() {
        let mut map = LayerMap {
            layers: vec![layer("body"), layer("head"), layer("leftArm")],
            ..Default::default()
        };
        map.animations.idle =
            Some(IdleAnim { breathing: Some(IdleBreathing::new("body")), ..Default::default() });

        let anims = build_all_animations(&map, &SynthesisOptions::default());
        assert!(anims.contains_key("idle"));
        assert!(anims.contains_key("hit_flash"));
        assert!(anims.contains_key("win_pose"));
    }

    #[test]
    fn test_easing_disabled_leaves_curves_unset() {
        let map = LayerMap { layers: vec![layer("head")], ..Default::default() };
        let options = SynthesisOptions { apply_easing: false, ..Default::default() };
        let anims = build_all_animations(&map, &options);

        let head = &anims["win_pose"].bones["head"];
        assert!(head.rotate.iter().all(|k| k.curve.is_none()));
        let slot = &anims["hit_flash"].slots["head_slot"];
        assert!(slot.color.iter().all(|k| k.curve.is_none()));
    }

    #[test]
    fn test_default_curves_applied() {
        let map = LayerMap { layers: vec![layer("head")], ..Default::default() };
        let anims = build_all_animations(&map, &SynthesisOptions::default());

        let head = &anims["win_pose"].bones["head"];
        assert!(head.rotate.iter().all(|k| k.curve == Some(Curve::CubicOut)));
        let slot = &anims["hit_flash"].slots["head_slot"];
        assert!(slot.color.iter().all(|k| k.curve == Some(Curve::Linear)));
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = AnimationKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["idle", "hit_flash", "win_pose"]);
    }
}
