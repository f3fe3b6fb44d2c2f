//! Configuration schema types for `rigsynth.toml`
//!
//! ```toml
//! [synthesis]
//! apply_easing = true
//! compress = true
//! bone_curve = "cubicOut"
//! slot_curve = "linear"
//!
//! [compression]
//! rotate_tolerance = 0.1
//! scale_tolerance = 0.002
//!
//! [hit_flash]
//! duration = 0.35
//! stagger = 0.02
//! intensity = 0.5
//!
//! [output]
//! pretty = true
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::{
    CompressionTolerance, HitFlashParams, SynthesisOptions, DEFAULT_BONE_CURVE,
    DEFAULT_SLOT_CURVE,
};
use crate::models::Curve;

/// Post-processing passes and their default curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Fill missing keyframe curves
    pub apply_easing: bool,
    /// Drop near-static interior bone keyframes
    pub compress: bool,
    pub bone_curve: Curve,
    pub slot_curve: Curve,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            apply_easing: true,
            compress: true,
            bone_curve: DEFAULT_BONE_CURVE,
            slot_curve: DEFAULT_SLOT_CURVE,
        }
    }
}

/// Compression thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Degrees
    pub rotate_tolerance: f64,
    pub scale_tolerance: f64,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        let tolerance = CompressionTolerance::default();
        Self { rotate_tolerance: tolerance.rotate, scale_tolerance: tolerance.scale }
    }
}

/// Hit-flash values used where a layer map leaves them unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitFlashConfig {
    pub duration: f64,
    pub stagger: f64,
    pub intensity: f64,
}

impl Default for HitFlashConfig {
    fn default() -> Self {
        let params = HitFlashParams::default();
        Self { duration: params.duration, stagger: params.stagger, intensity: params.intensity }
    }
}

/// Output formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Complete rigsynth.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigsynthConfig {
    pub synthesis: SynthesisConfig,
    pub compression: CompressionConfig,
    pub hit_flash: HitFlashConfig,
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "compression.rotate_tolerance")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rigsynth.toml: '{}' {}", self.field, self.message)
    }
}

impl RigsynthConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut check = |field: &str, value: f64, ok: bool, message: &str| {
            if !value.is_finite() {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a finite number".to_string(),
                });
            } else if !ok {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: message.to_string(),
                });
            }
        };

        let c = &self.compression;
        check(
            "compression.rotate_tolerance",
            c.rotate_tolerance,
            c.rotate_tolerance >= 0.0,
            "must not be negative",
        );
        check(
            "compression.scale_tolerance",
            c.scale_tolerance,
            c.scale_tolerance >= 0.0,
            "must not be negative",
        );

        let h = &self.hit_flash;
        check("hit_flash.duration", h.duration, h.duration > 0.0, "must be positive");
        check("hit_flash.stagger", h.stagger, h.stagger >= 0.0, "must not be negative");
        check("hit_flash.intensity", h.intensity, true, "");

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Synthesis settings described by this configuration.
    ///
    /// Intensity is clamped into its working range here, the same way a
    /// per-map override is.
    pub fn to_synthesis_options(&self) -> SynthesisOptions {
        let hit_flash = HitFlashParams {
            duration: self.hit_flash.duration,
            stagger: self.hit_flash.stagger,
            intensity: self.hit_flash.intensity,
        };
        SynthesisOptions {
            apply_easing: self.synthesis.apply_easing,
            compress: self.synthesis.compress,
            bone_curve: self.synthesis.bone_curve,
            slot_curve: self.synthesis.slot_curve,
            tolerance: CompressionTolerance {
                rotate: self.compression.rotate_tolerance,
                scale: self.compression.scale_tolerance,
            },
            hit_flash: hit_flash.resolve(None),
        }
    }
}
