//! Data models for layer maps and skeleton documents

mod layer;
mod skeleton;
mod track;

// Re-export all public types
pub use layer::{
    slot_name, valid_period, AnimationSpecs, HitFlashSpec, IdleAnim, IdleBreathing,
    IdleHeadSwing, LayerMap, LayerSpec, Pivot, ROOT_NAME,
};
pub use skeleton::{
    AttachmentGeometry, Bone, SkeletonDocument, SkeletonHeader, Skin, Slot, DEFAULT_SKIN,
    SPINE_VERSION,
};
pub use track::{
    Animation, BoneTimeline, ColorKey, Curve, Keyframe, RotateKey, ScaleKey, SlotTimeline,
};
