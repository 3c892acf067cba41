//! Configuration schema types for `domgeom.toml`
//!
//! Defines the structure and validation rules for the command-line tool's
//! configuration.

use serde::{Deserialize, Serialize};

/// Largest meaningful number of decimal places for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document
    #[default]
    Json,
    /// CSS-like function notation, one per line
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}', expected 'json' or 'text'", other)),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Fixed number of decimal places for text output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::default(), pretty: default_pretty(), precision: None }
    }
}

fn default_pretty() -> bool {
    true
}

/// Settings for `domgeom normalize`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Treat ignored keys in the init record as errors
    #[serde(default)]
    pub strict: bool,
}

/// Complete `domgeom.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeomConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Normalization settings
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "output.precision")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "domgeom.toml: '{}' {}", self.field, self.message)
    }
}

impl GeomConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(precision) = self.output.precision {
            if precision > MAX_PRECISION {
                errors.push(ConfigValidationError {
                    field: "output.precision".to_string(),
                    message: format!("must be at most {}", MAX_PRECISION),
                });
            }
        }

        errors
    }
}
