//! Layer map validation command

use std::path::Path;
use std::process::ExitCode;

use crate::validate::{validate_layer_map, Severity};

use super::{read_layer_map, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the validate command
pub fn run_validate(input: &Path, strict: bool, json: bool) -> ExitCode {
    if !json {
        println!("Validating {}...", input.display());
    }
    let layer_map = match read_layer_map(input) {
        Ok(map) => map,
        Err(code) => return code,
    };

    let issues = validate_layer_map(&layer_map);
    let error_count = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warning_count = issues.iter().filter(|i| i.severity == Severity::Warning).count();

    let has_failures = error_count > 0 || (strict && warning_count > 0);

    if json {
        let (errors, warnings): (Vec<_>, Vec<_>) = issues.iter().partition(|i| i.is_error());
        let output = serde_json::json!({
            "valid": !has_failures,
            "errors": errors,
            "warnings": warnings,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else if issues.is_empty() {
        println!();
        println!("No issues found.");
    } else {
        println!();
        for issue in &issues {
            eprintln!("{}", issue);
        }

        println!();
        match (error_count, warning_count) {
            (0, w) => println!("Found {} warning{}.", w, if w == 1 { "" } else { "s" }),
            (e, 0) => println!("Found {} error{}.", e, if e == 1 { "" } else { "s" }),
            (e, w) => println!(
                "Found {} error{}, {} warning{}.",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }

        if !strict && warning_count > 0 && error_count == 0 {
            println!("Hint: Run with --strict to treat warnings as errors.");
        }
    }

    if has_failures {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
