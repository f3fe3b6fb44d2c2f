//! Default skin construction from probed layer assets

use rayon::prelude::*;
use std::path::Path;

use crate::analyzer::{AssetInfo, AssetProbe};
use crate::models::{AttachmentGeometry, LayerMap, Skin};

/// Build the `default` skin: one region attachment per layer slot.
///
/// Probes run in parallel; results are keyed by slot name so the skin is
/// identical to a sequential build. Layers with an empty `file` are not
/// probed and get zero geometry.
pub fn build_skin<P: AssetProbe + ?Sized>(layer_map: &LayerMap, probe: &P) -> Skin {
    let entries: Vec<(String, String, AttachmentGeometry)> = layer_map
        .layers
        .par_iter()
        .map(|layer| {
            let info = if layer.file.is_empty() {
                AssetInfo::missing()
            } else {
                probe.probe(Path::new(&layer.file))
            };
            // TODO: offset x/y by layer.pivot once the pivot's unit and direction are defined.
            let geometry = AttachmentGeometry::sized(info.width, info.height);
            (layer.slot_name(), layer.name.clone(), geometry)
        })
        .collect();

    let mut skin = Skin::new();
    for (slot, attachment, geometry) in entries {
        skin.entry(slot).or_default().insert(attachment, geometry);
    }
    tracing::debug!("Built skin with {} slots", skin.len());
    skin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LayerSpec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Probe backed by a fixed table, counting calls.
    struct TableProbe {
        sizes: HashMap<String, (u32, u32)>,
        calls: AtomicUsize,
    }

    impl AssetProbe for TableProbe {
        fn probe(&self, path: &Path) -> AssetInfo {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.sizes.get(path.to_string_lossy().as_ref()) {
                Some(&(w, h)) => AssetInfo::sized(w, h),
                None => AssetInfo::missing(),
            }
        }
    }

    fn layer(name: &str, file: &str) -> LayerSpec {
        LayerSpec {
            name: name.to_string(),
            file: file.to_string(),
            kind: String::new(),
            parent: "root".to_string(),
            pivot: Default::default(),
        }
    }

    #[test]
    fn test_skin_uses_probed_dimensions() {
        let probe = TableProbe {
            sizes: HashMap::from([("head.png".to_string(), (64, 48))]),
            calls: AtomicUsize::new(0),
        };
        let map = LayerMap {
            layers: vec![layer("head", "head.png"), layer("legs", "legs.png")],
            ..Default::default()
        };

        let skin = build_skin(&map, &probe);
        assert_eq!(skin["head_slot"]["head"], AttachmentGeometry::sized(64, 48));
        // Missing art still yields an attachment
        assert_eq!(skin["legs_slot"]["legs"], AttachmentGeometry::sized(0, 0));
        assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_file_not_probed() {
        let probe = TableProbe { sizes: HashMap::new(), calls: AtomicUsize::new(0) };
        let map = LayerMap { layers: vec![layer("fx", "")], ..Default::default() };

        let skin = build_skin(&map, &probe);
        assert_eq!(skin["fx_slot"]["fx"].width, 0);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_attachment_placed_at_origin() {
        let probe = TableProbe {
            sizes: HashMap::from([("a.png".to_string(), (10, 10))]),
            calls: AtomicUsize::new(0),
        };
        let mut a = layer("a", "a.png");
        a.pivot.x = 0.0;
        let map = LayerMap { layers: vec![a], ..Default::default() };

        let geometry = build_skin(&map, &probe)["a_slot"]["a"];
        assert_eq!((geometry.x, geometry.y), (0.0, 0.0));
    }
}
