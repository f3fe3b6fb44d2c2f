//! rigsynth - Deterministic skeletal rig and procedural animation synthesis
//!
//! This library turns a layer map (a list of named image layers with parent
//! links and pivots) into a Spine-style skeleton document:
//! - Infer one bone and one slot per layer under a single root
//! - Probe layer images for attachment geometry
//! - Generate idle, hit-flash and win-pose animations
//! - Apply default easing curves and drop near-static bone keyframes

pub mod analyzer;
pub mod animation;
pub mod builder;
pub mod cli;
pub mod config;
pub mod export;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod rig;
pub mod skin;
pub mod validate;
