//! Idle loop: breathing and head swing

use crate::models::{Animation, IdleBreathing, IdleHeadSwing, LayerMap, RotateKey, ScaleKey};

/// Build the idle animation, or `None` when idle is absent, disabled, or
/// configures no sub-motion.
///
/// Both sub-motions may target the same bone; they land on separate
/// properties of that bone's timeline.
pub fn build_idle(layer_map: &LayerMap) -> Option<Animation> {
    let idle = layer_map.idle()?;
    if !idle.has_motion() {
        return None;
    }

    let mut anim = Animation::default();
    if let Some(breathing) = &idle.breathing {
        anim.bone_mut(&breathing.target).scale = breathing_keys(breathing);
    }
    if let Some(swing) = &idle.head_swing {
        anim.bone_mut(&swing.target).rotate = head_swing_keys(swing);
    }
    Some(anim)
}

/// Symmetric vertical pulse: rest, peak at half period, rest.
///
/// A period that is not finite and positive uses the default.
pub fn breathing_keys(breathing: &IdleBreathing) -> Vec<ScaleKey> {
    let p = breathing.effective_period();
    vec![
        ScaleKey::new(0.0, 1.0, 1.0),
        ScaleKey::new(p / 2.0, 1.0, 1.0 + breathing.scale_y),
        ScaleKey::new(p, 1.0, 1.0),
    ]
}

/// Symmetric oscillation `0, +deg, 0, -deg, 0` over quarter periods.
///
/// A period that is not finite and positive uses the default.
pub fn head_swing_keys(swing: &IdleHeadSwing) -> Vec<RotateKey> {
    let p = swing.effective_period();
    let deg = swing.rot_deg;
    vec![
        RotateKey::new(0.0, 0.0),
        RotateKey::new(p / 4.0, deg),
        RotateKey::new(p / 2.0, 0.0),
        RotateKey::new(p * 3.0 / 4.0, -deg),
        RotateKey::new(p, 0.0),
    ]
}
