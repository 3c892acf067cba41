//! Configuration loading and discovery for `domgeom.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{GeomConfig, OutputFormat};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "domgeom.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse domgeom.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output format
    pub format: Option<OutputFormat>,
    /// Override JSON pretty-printing
    pub pretty: Option<bool>,
    /// Override text precision
    pub precision: Option<usize>,
    /// Enable strict normalization
    pub strict: Option<bool>,
}

/// Find domgeom.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for domgeom.toml
/// 2. Check XDG_CONFIG_HOME/domgeom/domgeom.toml (or ~/.config/domgeom/domgeom.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find domgeom.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("domgeom").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find domgeom.toml by walking up from a specific directory.
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

/// Load configuration from a domgeom.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("project/domgeom.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<GeomConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(GeomConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<GeomConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: GeomConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut GeomConfig, overrides: &CliOverrides) {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }

    if let Some(pretty) = overrides.pretty {
        config.output.pretty = pretty;
    }

    if let Some(precision) = overrides.precision {
        config.output.precision = Some(precision);
    }

    if let Some(strict) = overrides.strict {
        config.normalize.strict = strict;
    }
}
