//! Prompt command

use std::path::Path;
use std::process::ExitCode;

use crate::export::write_output;
use crate::prompt::build_prompt;

use super::{read_layer_map, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the prompt command
pub fn run_prompt(input: &Path, output: Option<&Path>) -> ExitCode {
    let layer_map = match read_layer_map(input) {
        Ok(map) => map,
        Err(code) => return code,
    };
    let prompt = build_prompt(&layer_map.name_type_pairs());

    match output {
        Some(path) => {
            if let Err(e) = write_output(path, prompt.trim_end_matches('\n')) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {}", path.display());
        }
        None => print!("{}", prompt),
    }

    ExitCode::from(EXIT_SUCCESS)
}
