//! Bone and slot inference from a layer map
//!
//! The shipped inference is a 1:1 mapping (one bone and one slot per layer).
//! It sits behind [`RigInference`] so a smarter engine can replace it as long
//! as it returns the same shapes with parents resolvable in its bone list.

use crate::models::{Bone, LayerMap, Slot, ROOT_NAME};

/// Bones and slots derived from a layer map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rig {
    pub bones: Vec<Bone>,
    pub slots: Vec<Slot>,
}

/// Capability to derive a rig from a layer map.
pub trait RigInference {
    fn infer(&self, layer_map: &LayerMap) -> Rig;
}

/// One bone per layer, parented as declared, under a single `root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerRig;

impl RigInference for LayerRig {
    fn infer(&self, layer_map: &LayerMap) -> Rig {
        let mut bones = Vec::with_capacity(layer_map.layers.len() + 1);
        let mut slots = Vec::with_capacity(layer_map.layers.len());

        if !layer_map.layers.iter().any(|l| l.is_root()) {
            bones.push(Bone::root(ROOT_NAME));
        }

        for layer in &layer_map.layers {
            if layer.is_root() {
                bones.push(Bone::root(ROOT_NAME));
            } else {
                bones.push(Bone::child(&layer.name, &layer.parent));
            }
            slots.push(Slot {
                name: layer.slot_name(),
                bone: layer.name.clone(),
                attachment: layer.name.clone(),
            });
        }

        tracing::info!("Inferred {} bones, {} slots", bones.len(), slots.len());
        Rig { bones, slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LayerSpec;

    fn layer(name: &str, parent: &str) -> LayerSpec {
        LayerSpec {
            name: name.to_string(),
            file: format!("{}.png", name),
            kind: String::new(),
            parent: parent.to_string(),
            pivot: Default::default(),
        }
    }

    fn map(layers: Vec<LayerSpec>) -> LayerMap {
        LayerMap { character_id: "hero".to_string(), layers, ..Default::default() }
    }

    #[test]
    fn test_root_synthesized() {
        let rig = LayerRig.infer(&map(vec![layer("body", "root"), layer("head", "body")]));
        assert_eq!(rig.bones.len(), 3);
        assert_eq!(rig.bones[0], Bone::root("root"));
        assert_eq!(rig.bones[1], Bone::child("body", "root"));
        assert_eq!(rig.bones[2], Bone::child("head", "body"));
        assert_eq!(rig.bones.iter().filter(|b| b.is_root()).count(), 1);
    }

    #[test]
    fn test_slots_follow_layer_order() {
        let rig = LayerRig.infer(&map(vec![layer("body", "root"), layer("head", "body")]));
        let names: Vec<_> = rig.slots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["body_slot", "head_slot"]);
        assert_eq!(rig.slots[1].bone, "head");
        assert_eq!(rig.slots[1].attachment, "head");
    }

    #[test]
    fn test_declared_root_layer_not_duplicated() {
        let rig = LayerRig.infer(&map(vec![layer("root", "root"), layer("body", "root")]));
        assert_eq!(rig.bones.len(), 2);
        assert_eq!(rig.bones[0], Bone::root("root"));
        assert_eq!(rig.bones.iter().filter(|b| b.is_root()).count(), 1);
        assert_eq!(rig.slots.len(), 2);
        assert_eq!(rig.slots[0].name, "root_slot");
    }

    #[test]
    fn test_empty_layer_map() {
        let rig = LayerRig.infer(&map(vec![]));
        assert_eq!(rig.bones, vec![Bone::root("root")]);
        assert!(rig.slots.is_empty());
    }

    #[test]
    fn test_dangling_parent_passes_through() {
        let rig = LayerRig.infer(&map(vec![layer("head", "ghost")]));
        assert_eq!(rig.bones[1].parent.as_deref(), Some("ghost"));
    }
}
