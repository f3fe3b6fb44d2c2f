//! CLI integration tests for rigsynth
//!
//! These tests run the built binary against the layer maps in
//! `tests/fixtures` and check output documents and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

fn rigsynth(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rigsynth"))
        .args(args)
        // Keep a user's config out of the picture
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("rigsynth-test-no-config"))
        .output()
        .expect("Failed to execute rigsynth")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "rigsynth failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON document")
}

#[test]
fn test_generate_to_stdout() {
    let output = rigsynth(&["generate", "tests/fixtures/hero.yaml"]);
    assert_success(&output);

    let doc = stdout_json(&output);
    assert_eq!(doc["skeleton"]["spine"], "4.1");
    assert_eq!(doc["bones"].as_array().unwrap().len(), 6);
    assert_eq!(doc["slots"].as_array().unwrap().len(), 5);
    assert!(doc["bones"][0].get("parent").is_none());
    assert_eq!(doc["bones"][2]["parent"], "body");

    let animations = doc["animations"].as_object().unwrap();
    let names: Vec<&str> = animations.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["hit_flash", "idle", "win_pose"]);

    let head_flash = &doc["animations"]["hit_flash"]["slots"]["head_slot"]["color"];
    assert_eq!(head_flash[1]["color"], "ffb2b2b2");
}

#[test]
fn test_generate_is_byte_identical_across_runs() {
    let first = rigsynth(&["generate", "tests/fixtures/hero.yaml"]);
    let second = rigsynth(&["generate", "tests/fixtures/hero.yaml"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_to_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("nested/hero.json");
    let out_str = out.to_str().unwrap();

    let output = rigsynth(&["generate", "tests/fixtures/hero.yaml", "-o", out_str, "--compact"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Saved:"));

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["skins"]["default"]["body_slot"]["body"]["width"], 0);
}

#[test]
fn test_generate_no_easing_omits_curves() {
    let output = rigsynth(&["generate", "tests/fixtures/hero.yaml", "--no-easing"]);
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("\"curve\""));
}

#[test]
fn test_generate_json_input() {
    let output = rigsynth(&["generate", "tests/fixtures/prop.json"]);
    assert_success(&output);
    let doc = stdout_json(&output);
    assert!(doc["animations"].get("win_pose").is_none());
    assert!(doc["animations"].get("idle").is_none());
    assert_eq!(doc["animations"]["hit_flash"]["slots"].as_object().unwrap().len(), 2);
}

#[test]
fn test_generate_probes_assets_dir() {
    let temp = TempDir::new().unwrap();
    RgbaImage::from_pixel(12, 7, Rgba([255, 0, 0, 255]))
        .save(temp.path().join("body.png"))
        .unwrap();
    let map_path = temp.path().join("map.yaml");
    fs::write(&map_path, "characterId: dot\nlayers:\n  - name: body\n    file: body.png\n")
        .unwrap();

    let output = rigsynth(&[
        "generate",
        map_path.to_str().unwrap(),
        "--assets-dir",
        temp.path().to_str().unwrap(),
    ]);
    assert_success(&output);

    let doc = stdout_json(&output);
    let body = &doc["skins"]["default"]["body_slot"]["body"];
    assert_eq!(body["width"], 12);
    assert_eq!(body["height"], 7);
}

#[test]
fn test_generate_with_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rigsynth.toml");
    fs::write(&config, "[synthesis]\nbone_curve = \"stepped\"\n\n[output]\npretty = false\n")
        .unwrap();

    let output = rigsynth(&[
        "generate",
        "tests/fixtures/hero.yaml",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert_success(&output);
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("\"curve\":\"stepped\""));
    assert!(!text.contains("cubicOut"));
}

#[test]
fn test_generate_rejects_invalid_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rigsynth.toml");
    fs::write(&config, "[compression]\nrotate_tolerance = -1.0\n").unwrap();

    let output = rigsynth(&[
        "generate",
        "tests/fixtures/hero.yaml",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("rotate_tolerance"));
}

#[test]
fn test_generate_malformed_input_fails() {
    let output = rigsynth(&["generate", "tests/fixtures/malformed.yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_generate_missing_input_is_invalid_args() {
    let output = rigsynth(&["generate", "tests/fixtures/does_not_exist.yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_generate_unknown_extension_is_invalid_args() {
    let output = rigsynth(&["generate", "Cargo.toml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_validate_clean_map() {
    let output = rigsynth(&["validate", "tests/fixtures/hero.yaml"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No issues found."));
}

#[test]
fn test_validate_missing_parent() {
    let output = rigsynth(&["validate", "tests/fixtures/invalid_parent.yaml", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"][0]["issue_type"], "missing_parent");
    assert_eq!(report["errors"][0]["suggestion"], "body");
}

#[test]
fn test_validate_warnings_and_strict() {
    let relaxed = rigsynth(&["validate", "tests/fixtures/unknown_target.yaml"]);
    assert!(relaxed.status.success());
    assert!(String::from_utf8_lossy(&relaxed.stdout).contains("--strict"));

    let strict = rigsynth(&["validate", "tests/fixtures/unknown_target.yaml", "--strict"]);
    assert_eq!(strict.status.code(), Some(1));
}

#[test]
fn test_hybrid_manifest() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("hero.hybrid.json");

    let output = rigsynth(&[
        "hybrid",
        "tests/fixtures/hero.yaml",
        "--video",
        "fx/hero_hit.webm",
        "-o",
        out.to_str().unwrap(),
        "--offset-ms",
        "120",
    ]);
    assert_success(&output);

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(manifest["type"], "hybrid");
    assert_eq!(manifest["video"], "fx/hero_hit.webm");
    assert_eq!(manifest["runtimeSpecMeta"]["layers"], 5);
    assert_eq!(manifest["sync"]["offsetMs"], 120);
    assert_eq!(manifest["skeleton"]["bones"].as_array().unwrap().len(), 6);
}

#[test]
fn test_prompt_lists_layers() {
    let output = rigsynth(&["prompt", "tests/fixtures/hero.yaml"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Spine 2D"));
    assert!(text.contains("Layers:\n- body: torso\n- head: head\n- leftArm: arm\n"));
}

#[test]
fn test_prompt_to_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("prompt.txt");
    let output = rigsynth(&["prompt", "tests/fixtures/prop.json", "-o", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(Path::new(&out).exists());
    assert!(fs::read_to_string(&out).unwrap().ends_with("- box: \n"));
}
