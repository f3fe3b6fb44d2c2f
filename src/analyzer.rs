//! Asset dimension probing for layer images
//!
//! Probing never fails: a missing or unreadable image yields zeroed
//! dimensions so the rig still assembles while art is incomplete.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of probing one asset file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Whether the file exists on disk
    pub exists: bool,
    pub width: u32,
    pub height: u32,
    /// Bounding box `[x0, y0, x1, y1]` in pixels
    pub bbox: [u32; 4],
}

impl AssetInfo {
    /// Zeroed info for an asset that is absent.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Info for an existing asset with known size.
    pub fn sized(width: u32, height: u32) -> Self {
        Self { exists: true, width, height, bbox: [0, 0, width, height] }
    }
}

/// Something that can report image dimensions for an asset path.
///
/// Implementations must be infallible; failures are reported as zeroed
/// [`AssetInfo`]. `Sync` so probes can run across the rayon pool.
pub trait AssetProbe: Sync {
    fn probe(&self, path: &Path) -> AssetInfo;
}

/// Probe that reads image headers from the filesystem.
///
/// Relative paths are resolved against `base_dir` when one is set (the
/// layer map's directory, typically).
#[derive(Debug, Clone, Default)]
pub struct ImageAnalyzer {
    base_dir: Option<std::path::PathBuf>,
}

impl ImageAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative asset paths against `dir`.
    pub fn with_base_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { base_dir: Some(dir.into()) }
    }

    fn resolve(&self, path: &Path) -> std::path::PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl AssetProbe for ImageAnalyzer {
    fn probe(&self, path: &Path) -> AssetInfo {
        let path = self.resolve(path);
        if !path.exists() {
            tracing::debug!("Asset not found: {}", path.display());
            return AssetInfo::missing();
        }
        match image::image_dimensions(&path) {
            Ok((width, height)) => AssetInfo::sized(width, height),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                AssetInfo { exists: true, ..AssetInfo::missing() }
            }
        }
    }
}

/// Probe that reports every asset as missing. Useful for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnalyzer;

impl AssetProbe for NullAnalyzer {
    fn probe(&self, _path: &Path) -> AssetInfo {
        AssetInfo::missing()
    }
}
