//! Configuration for the rigsynth CLI
//!
//! Provides types, discovery and loading for `rigsynth.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
