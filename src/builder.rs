//! Skeleton assembly: rig inference, skin, animations, header
//!
//! The assembler performs no validation. A layer map with dangling parent
//! references still yields a well-formed document whose bone parent does not
//! resolve; run [`crate::validate`] first when the input is untrusted.

use std::collections::BTreeMap;

use crate::analyzer::AssetProbe;
use crate::animation::{build_all_animations, SynthesisOptions};
use crate::models::{LayerMap, SkeletonDocument, SkeletonHeader, DEFAULT_SKIN};
use crate::rig::{LayerRig, RigInference};
use crate::skin::build_skin;

/// Assembles skeleton documents from layer maps.
///
/// Generic over the inference engine and the asset probe so either can be
/// swapped without touching the skin or animation stages.
pub struct SkeletonBuilder<'a, R: RigInference = LayerRig> {
    inference: R,
    probe: &'a dyn AssetProbe,
    options: SynthesisOptions,
}

impl<'a> SkeletonBuilder<'a, LayerRig> {
    /// Builder using the default 1:1 layer rig.
    pub fn new(probe: &'a dyn AssetProbe) -> Self {
        Self { inference: LayerRig, probe, options: SynthesisOptions::default() }
    }
}

impl<'a, R: RigInference> SkeletonBuilder<'a, R> {
    /// Replace the rig inference engine.
    pub fn with_inference<R2: RigInference>(self, inference: R2) -> SkeletonBuilder<'a, R2> {
        SkeletonBuilder { inference, probe: self.probe, options: self.options }
    }

    /// Replace the synthesis options.
    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Build the full skeleton document.
    pub fn build(&self, layer_map: &LayerMap) -> SkeletonDocument {
        let rig = self.inference.infer(layer_map);
        let skin = build_skin(layer_map, self.probe);
        let animations = build_all_animations(layer_map, &self.options);

        tracing::debug!(
            "Assembled '{}': {} bones, {} slots, {} animations",
            layer_map.character_id,
            rig.bones.len(),
            rig.slots.len(),
            animations.len()
        );

        SkeletonDocument {
            skeleton: SkeletonHeader::default(),
            bones: rig.bones,
            slots: rig.slots,
            skins: BTreeMap::from([(DEFAULT_SKIN.to_string(), skin)]),
            animations,
        }
    }
}

/// Build a skeleton document with the default rig and options.
pub fn build_skeleton(layer_map: &LayerMap, probe: &dyn AssetProbe) -> SkeletonDocument {
    SkeletonBuilder::new(probe).build(layer_map)
}
