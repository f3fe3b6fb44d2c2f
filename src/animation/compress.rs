//! Tolerance-based keyframe reduction for bone tracks
//!
//! An interior keyframe is dropped when it differs from both of its original
//! neighbours by less than the tolerance. The first and last keyframe of a
//! track are always kept. Slot tracks are never touched.

use crate::models::{Animation, RotateKey, ScaleKey};

/// Thresholds below which a bone keyframe counts as static.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionTolerance {
    /// Degrees; a change must be strictly smaller to be dropped
    pub rotate: f64,
    /// Per component; a change at most this large is dropped
    pub scale: f64,
}

impl Default for CompressionTolerance {
    fn default() -> Self {
        Self { rotate: 0.1, scale: 0.002 }
    }
}

/// Keep first and last; keep interior `i` unless `is_static(prev, cur, next)`.
fn retain_significant<K: Clone>(keys: &[K], is_static: impl Fn(&K, &K, &K) -> bool) -> Vec<K> {
    if keys.len() <= 2 {
        return keys.to_vec();
    }
    let mut kept = Vec::with_capacity(keys.len());
    kept.push(keys[0].clone());
    for window in keys.windows(3) {
        let (prev, cur, next) = (&window[0], &window[1], &window[2]);
        if !is_static(prev, cur, next) {
            kept.push(cur.clone());
        }
    }
    kept.push(keys[keys.len() - 1].clone());
    kept
}

/// Compress a rotation track.
pub fn compress_rotate(keys: &[RotateKey], tolerance: f64) -> Vec<RotateKey> {
    retain_significant(keys, |prev, cur, next| {
        (cur.angle - prev.angle).abs() < tolerance && (next.angle - cur.angle).abs() < tolerance
    })
}

/// Compress a scale track. Both components must be within tolerance of
/// both neighbours for a key to be dropped.
pub fn compress_scale(keys: &[ScaleKey], tolerance: f64) -> Vec<ScaleKey> {
    let close = |a: f64, b: f64| (a - b).abs() <= tolerance;
    retain_significant(keys, |prev, cur, next| {
        close(cur.x, prev.x) && close(cur.y, prev.y) && close(next.x, cur.x) && close(next.y, cur.y)
    })
}

/// Compress every bone track of `anim` in place. Returns the number of
/// keyframes dropped.
pub fn compress_bone_tracks(anim: &mut Animation, tolerance: &CompressionTolerance) -> usize {
    let mut dropped = 0;
    for timeline in anim.bones.values_mut() {
        let before = timeline.rotate.len() + timeline.scale.len();
        timeline.rotate = compress_rotate(&timeline.rotate, tolerance.rotate);
        timeline.scale = compress_scale(&timeline.scale, tolerance.scale);
        dropped += before - (timeline.rotate.len() + timeline.scale.len());
    }
    dropped
}
