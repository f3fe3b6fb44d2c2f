//! Staggered slot hit flash
//!
//! The flash uses four canonical breakpoints over `duration`:
//!
//! | breakpoint | time           | color    |
//! |------------|----------------|----------|
//! | 0          | `0`            | white    |
//! | 1          | `duration / 6` | mid tint |
//! | 2          | `duration / 3` | white    |
//! | 3          | `duration`     | white    |
//!
//! Slot `i` (in layer order) shifts every breakpoint by `i * stagger`,
//! clamped to `duration`, so the flash sweeps across the character.

use crate::models::{slot_name, Animation, ColorKey, HitFlashSpec, LayerMap, SlotTimeline};

/// Opaque white in the slot color format.
pub const WHITE: &str = "ffffffff";

/// Lowest accepted flash intensity.
pub const MIN_INTENSITY: f64 = 0.1;
/// Highest accepted flash intensity.
pub const MAX_INTENSITY: f64 = 0.95;

/// Resolved hit-flash settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitFlashParams {
    /// Flash length in seconds
    pub duration: f64,
    /// Per-slot offset in seconds
    pub stagger: f64,
    /// Mid-flash dimming, 0.1..=0.95
    pub intensity: f64,
}

impl Default for HitFlashParams {
    fn default() -> Self {
        Self { duration: 0.35, stagger: 0.02, intensity: 0.5 }
    }
}

impl HitFlashParams {
    /// Overlay the fields set in `spec` on top of `self`.
    ///
    /// Intensity is clamped into range; a non-positive or non-finite
    /// duration keeps the default, and a negative stagger becomes zero.
    pub fn resolve(&self, spec: Option<&HitFlashSpec>) -> Self {
        let spec = spec.cloned().unwrap_or_default();

        let duration = spec
            .duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(self.duration);
        let stagger = spec.stagger.filter(|s| s.is_finite()).unwrap_or(self.stagger).max(0.0);
        let intensity = spec
            .intensity
            .filter(|i| i.is_finite())
            .unwrap_or(self.intensity)
            .clamp(MIN_INTENSITY, MAX_INTENSITY);

        Self { duration, stagger, intensity }
    }

    /// Canonical breakpoint times before any stagger.
    pub fn breakpoints(&self) -> [f64; 4] {
        let d = self.duration;
        [0.0, d / 6.0, d / 3.0, d]
    }

    /// Canonical breakpoint colors.
    pub fn colors(&self) -> [String; 4] {
        let mid = mid_tint_hex(self.intensity);
        [WHITE.to_string(), mid, WHITE.to_string(), WHITE.to_string()]
    }
}

/// Grey level of the mid-flash tint: `floor(255 * (1 - intensity * 0.6))`,
/// with intensity clamped to 0.1..=0.95.
pub fn mid_tint_channel(intensity: f64) -> u8 {
    let intensity = intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
    (255.0 * (1.0 - intensity * 0.6)) as u8
}

/// Mid-flash color: opaque alpha followed by three equal channels.
pub fn mid_tint_hex(intensity: f64) -> String {
    let c = mid_tint_channel(intensity);
    format!("ff{:02x}{:02x}{:02x}", c, c, c)
}

fn round4(t: f64) -> f64 {
    (t * 10_000.0).round() / 10_000.0
}

/// Color keyframes for the slot at `index` in layer order.
///
/// Times are sorted, unique and within `[0, duration]`. Each time takes the
/// color of the nearest shifted breakpoint; ties go to the lowest index.
pub fn slot_keyframes(index: usize, params: &HitFlashParams) -> Vec<ColorKey> {
    let duration = params.duration;
    let offset = index as f64 * params.stagger;
    let shifted: Vec<f64> =
        params.breakpoints().iter().map(|bt| (bt + offset).min(duration)).collect();
    let colors = params.colors();

    let mut times: Vec<f64> = shifted.iter().map(|&t| round4(t).clamp(0.0, duration)).collect();
    times.sort_by(f64::total_cmp);
    times.dedup();

    times
        .into_iter()
        .map(|t| {
            let mut nearest = 0;
            let mut best = f64::INFINITY;
            for (i, bt) in shifted.iter().enumerate() {
                let d = (t - bt).abs();
                if d < best {
                    best = d;
                    nearest = i;
                }
            }
            ColorKey::new(t, colors[nearest].clone())
        })
        .collect()
}

/// Build the hit flash: one color track per slot, staggered in layer order.
///
/// `defaults` supplies any value the layer map's `hitFlash` block omits.
pub fn build_hit_flash(layer_map: &LayerMap, defaults: &HitFlashParams) -> Animation {
    let params = defaults.resolve(layer_map.animations.hit_flash.as_ref());
    let mut anim = Animation::default();
    for (index, layer) in layer_map.layers.iter().enumerate() {
        anim.slots.insert(
            slot_name(&layer.name),
            SlotTimeline { color: slot_keyframes(index, &params) },
        );
    }
    anim
}
