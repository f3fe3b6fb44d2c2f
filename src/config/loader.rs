//! Configuration loading and discovery for `rigsynth.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::RigsynthConfig;
use crate::models::Curve;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "rigsynth.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse rigsynth.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error(
        "Config validation failed:\n{}",
        .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n")
    )]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Force easing on or off
    pub apply_easing: Option<bool>,
    /// Force compression on or off
    pub compress: Option<bool>,
    pub bone_curve: Option<Curve>,
    pub slot_curve: Option<Curve>,
    pub rotate_tolerance: Option<f64>,
    pub scale_tolerance: Option<f64>,
    /// Force pretty or compact JSON
    pub pretty: Option<bool>,
}

/// Find rigsynth.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for rigsynth.toml
/// 2. Check XDG_CONFIG_HOME/rigsynth/rigsynth.toml (or ~/.config/rigsynth/rigsynth.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find rigsynth.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("rigsynth").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find rigsynth.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a rigsynth.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("art/rigsynth.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<RigsynthConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<RigsynthConfig, ConfigError> {
    tracing::debug!("Loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: RigsynthConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no rigsynth.toml is found.
pub fn default_config() -> RigsynthConfig {
    RigsynthConfig::default()
}

/// Merge CLI overrides into a loaded configuration.
///
/// CLI arguments take precedence over config file values.
///
/// # Example
/// ```ignore
/// let mut config = load_config(None)?;
/// let overrides = CliOverrides { compress: Some(false), ..Default::default() };
/// merge_cli_overrides(&mut config, &overrides);
/// ```
pub fn merge_cli_overrides(config: &mut RigsynthConfig, overrides: &CliOverrides) {
    if let Some(apply_easing) = overrides.apply_easing {
        config.synthesis.apply_easing = apply_easing;
    }
    if let Some(compress) = overrides.compress {
        config.synthesis.compress = compress;
    }
    if let Some(curve) = overrides.bone_curve {
        config.synthesis.bone_curve = curve;
    }
    if let Some(curve) = overrides.slot_curve {
        config.synthesis.slot_curve = curve;
    }

    if let Some(tolerance) = overrides.rotate_tolerance {
        config.compression.rotate_tolerance = tolerance;
    }
    if let Some(tolerance) = overrides.scale_tolerance {
        config.compression.scale_tolerance = tolerance;
    }

    if let Some(pretty) = overrides.pretty {
        config.output.pretty = pretty;
    }
}

/// Load config, apply overrides, and re-validate the result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<RigsynthConfig, ConfigError> {
    let mut config = load_config(path)?;
    merge_cli_overrides(&mut config, overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output]\npretty = false\n");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "");

        let subdir = temp.path().join("characters").join("hero");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_path() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "[compression]\nrotate_tolerance = 0.25\n");

        let config = load_config(Some(&path)).expect("should load config");
        assert_eq!(config.compression.rotate_tolerance, 0.25);
        assert!(config.synthesis.apply_easing);
    }

    #[test]
    fn test_load_config_parse_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "[compression\nbroken");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "[hit_flash]\nduration = -1.0\n");

        let err = load_config(Some(&path)).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("hit_flash.duration"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/rigsynth.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = default_config();
        let overrides = CliOverrides {
            apply_easing: Some(false),
            compress: Some(false),
            rotate_tolerance: Some(1.0),
            pretty: Some(false),
            ..Default::default()
        };

        merge_cli_overrides(&mut config, &overrides);
        assert!(!config.synthesis.apply_easing);
        assert!(!config.synthesis.compress);
        assert_eq!(config.compression.rotate_tolerance, 1.0);
        assert_eq!(config.compression.scale_tolerance, 0.002);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_merge_cli_overrides_empty_is_noop() {
        let mut config = default_config();
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_resolve_config_rejects_bad_override() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "");
        let overrides = CliOverrides { scale_tolerance: Some(-0.5), ..Default::default() };

        let err = resolve_config(Some(&path), &overrides).unwrap_err();
        assert!(err.to_string().contains("compression.scale_tolerance"));
    }
}
