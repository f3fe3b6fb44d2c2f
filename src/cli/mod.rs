//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod prompt;
mod validate;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::analyzer::ImageAnalyzer;
use crate::config::{resolve_config, CliOverrides, RigsynthConfig};
use crate::models::{Curve, LayerMap};
use crate::parser::{load_layer_map, LayerMapError};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// rigsynth - Synthesize Spine-style skeletons and animations from layer maps
#[derive(Parser)]
#[command(name = "rigsynth")]
#[command(about = "Synthesize a rigged skeleton with procedural animations from a layer map")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the commands that synthesize a skeleton
#[derive(Args, Debug, Clone, Default)]
pub struct SynthesisArgs {
    /// Path to rigsynth.toml (default: discovered from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory that relative layer files are resolved against
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Leave keyframe curves unset
    #[arg(long)]
    pub no_easing: bool,

    /// Keep every generated bone keyframe
    #[arg(long)]
    pub no_compress: bool,

    /// Rotation compression tolerance in degrees
    #[arg(long)]
    pub rotate_tolerance: Option<f64>,

    /// Scale compression tolerance per component
    #[arg(long)]
    pub scale_tolerance: Option<f64>,

    /// Default curve for bone keyframes (linear, stepped, cubicIn, cubicOut, cubicInOut)
    #[arg(long)]
    pub bone_curve: Option<Curve>,

    /// Default curve for slot keyframes
    #[arg(long)]
    pub slot_curve: Option<Curve>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl SynthesisArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            apply_easing: self.no_easing.then_some(false),
            compress: self.no_compress.then_some(false),
            bone_curve: self.bone_curve,
            slot_curve: self.slot_curve,
            rotate_tolerance: self.rotate_tolerance,
            scale_tolerance: self.scale_tolerance,
            pretty: self.compact.then_some(false),
        }
    }

    /// Load config and apply the command-line overrides.
    fn resolve(&self) -> Result<RigsynthConfig, ExitCode> {
        resolve_config(self.config.as_deref(), &self.overrides()).map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INVALID_ARGS)
        })
    }

    fn analyzer(&self) -> ImageAnalyzer {
        match &self.assets_dir {
            Some(dir) => ImageAnalyzer::with_base_dir(dir),
            None => ImageAnalyzer::new(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a skeleton document from a layer map
    Generate {
        /// Layer map (.yaml, .yml, .json or .json5)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        synthesis: SynthesisArgs,
    },

    /// Check a layer map for dangling parents, duplicates and other mistakes
    Validate {
        /// Layer map to check
        input: PathBuf,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Package a skeleton with a reference video as a hybrid manifest
    Hybrid {
        /// Layer map to synthesize from
        input: PathBuf,

        /// Path of the video the skeleton plays against
        #[arg(long)]
        video: String,

        /// Output manifest file
        #[arg(short, long)]
        output: PathBuf,

        /// Playback offset between skeleton and video in milliseconds
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        offset_ms: i64,

        #[command(flatten)]
        synthesis: SynthesisArgs,
    },

    /// Print the rig inference prompt for a layer map
    Prompt {
        /// Layer map to describe
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Install the stderr log subscriber.
///
/// With no `-v`, `RUST_LOG` decides and the fallback is `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load a layer map, reporting failures on stderr.
///
/// Unreadable files map to exit code 2, malformed content to exit code 1.
pub(crate) fn read_layer_map(path: &Path) -> Result<LayerMap, ExitCode> {
    load_layer_map(path).map_err(|e| {
        eprintln!("Error: Cannot load '{}': {}", path.display(), e);
        match e {
            LayerMapError::Io(_) | LayerMapError::UnsupportedFormat(_) => {
                ExitCode::from(EXIT_INVALID_ARGS)
            }
            _ => ExitCode::from(EXIT_ERROR),
        }
    })
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { input, output, synthesis } => {
            generate::run_generate(&input, output.as_deref(), &synthesis)
        }
        Commands::Validate { input, strict, json } => {
            validate::run_validate(&input, strict, json)
        }
        Commands::Hybrid { input, video, output, offset_ms, synthesis } => {
            generate::run_hybrid(&input, &video, &output, offset_ms, &synthesis)
        }
        Commands::Prompt { input, output } => prompt::run_prompt(&input, output.as_deref()),
    }
}
