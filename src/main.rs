//! rigsynth - command-line skeleton synthesizer

use std::process::ExitCode;

use rigsynth::cli;

fn main() -> ExitCode {
    cli::run()
}
