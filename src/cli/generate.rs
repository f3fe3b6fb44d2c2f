//! Skeleton synthesis commands (generate, hybrid)

use std::path::Path;
use std::process::ExitCode;

use crate::builder::SkeletonBuilder;
use crate::export::{ExportOptions, Exporter, HybridExporter, SkeletonJsonExporter};
use crate::models::SkeletonDocument;

use super::{read_layer_map, SynthesisArgs, EXIT_ERROR, EXIT_SUCCESS};

/// Load, configure and build. Returns the document and output options.
fn synthesize(
    input: &Path,
    args: &SynthesisArgs,
) -> Result<(SkeletonDocument, ExportOptions), ExitCode> {
    let config = args.resolve()?;
    let layer_map = read_layer_map(input)?;
    let analyzer = args.analyzer();

    let document = SkeletonBuilder::new(&analyzer)
        .with_options(config.to_synthesis_options())
        .build(&layer_map);

    Ok((document, ExportOptions { pretty: config.output.pretty }))
}

/// Execute the generate command
pub fn run_generate(input: &Path, output: Option<&Path>, args: &SynthesisArgs) -> ExitCode {
    let (document, options) = match synthesize(input, args) {
        Ok(built) => built,
        Err(code) => return code,
    };
    let exporter = SkeletonJsonExporter::new();

    match output {
        Some(path) => {
            if let Err(e) = exporter.export(&document, path, &options) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {}", path.display());
        }
        None => match exporter.export_to_string(&document, &options) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the hybrid command
pub fn run_hybrid(
    input: &Path,
    video: &str,
    output: &Path,
    offset_ms: i64,
    args: &SynthesisArgs,
) -> ExitCode {
    let (document, options) = match synthesize(input, args) {
        Ok(built) => built,
        Err(code) => return code,
    };

    let exporter = HybridExporter::new(video).with_offset_ms(offset_ms);
    if let Err(e) = exporter.export(&document, output, &options) {
        eprintln!("Error: Cannot write '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
