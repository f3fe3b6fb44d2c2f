//! Default curve assignment

use crate::models::{Animation, Curve, Keyframe};

fn fill<K: Keyframe>(keys: &mut [K], curve: Curve) {
    for key in keys {
        key.curve_mut().get_or_insert(curve);
    }
}

/// Give every keyframe without a curve the default for its track kind.
///
/// Bone tracks get `bone_curve`, slot color tracks get `slot_curve`.
/// Curves already set by a generator are left alone.
pub fn apply_default_curves(anim: &mut Animation, bone_curve: Curve, slot_curve: Curve) {
    for timeline in anim.bones.values_mut() {
        fill(&mut timeline.rotate, bone_curve);
        fill(&mut timeline.scale, bone_curve);
    }
    for timeline in anim.slots.values_mut() {
        fill(&mut timeline.color, slot_curve);
    }
}
