//! Win pose: a short celebratory lift for head and arms

use crate::models::{Animation, LayerMap, RotateKey};

/// `(time, angle)` samples for the head.
const HEAD_CURVE: [(f64, f64); 4] = [(0.0, 0.0), (0.2, 5.0), (0.6, 2.0), (1.0, 0.0)];
/// `(time, angle)` samples for each arm.
const ARM_CURVE: [(f64, f64); 4] = [(0.0, 0.0), (0.3, 8.0), (0.8, 3.0), (1.2, 0.0)];

const HEAD: &str = "head";
const ARMS: [&str; 2] = ["leftArm", "rightArm"];

fn keys(curve: &[(f64, f64)]) -> Vec<RotateKey> {
    curve.iter().map(|&(t, a)| RotateKey::new(t, a)).collect()
}

/// Build the win pose, or `None` when none of `head`, `leftArm`, `rightArm`
/// is a layer name.
pub fn build_win_pose(layer_map: &LayerMap) -> Option<Animation> {
    let mut anim = Animation::default();

    if layer_map.has_layer(HEAD) {
        anim.bone_mut(HEAD).rotate = keys(&HEAD_CURVE);
    }
    for arm in ARMS {
        if layer_map.has_layer(arm) {
            anim.bone_mut(arm).rotate = keys(&ARM_CURVE);
        }
    }

    if anim.bones.is_empty() {
        None
    } else {
        Some(anim)
    }
}
