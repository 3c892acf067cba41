//! Normalize command implementation

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{GeomConfig, OutputFormat};
use crate::matrix::{validate_and_fixup, DomMatrixInit};

use super::output::{format_call, format_number, to_json};
use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the normalize command
///
/// Reads the init record from `json`, `file`, or stdin, in that order.
pub fn run_normalize(
    json: Option<&str>,
    file: Option<&Path>,
    array: bool,
    config: &GeomConfig,
) -> ExitCode {
    let source = match read_source(json, file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&source) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: invalid JSON: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let unknown = DomMatrixInit::unknown_keys(&value);
    for key in &unknown {
        let prefix = if config.normalize.strict { "Error" } else { "Warning" };
        eprintln!("{}: ignoring unknown key '{}'", prefix, key);
    }
    if config.normalize.strict && !unknown.is_empty() {
        return ExitCode::from(EXIT_ERROR);
    }

    let init = match DomMatrixInit::from_value(value) {
        Ok(init) => init,
        Err(e) => {
            eprintln!("Error: invalid matrix init: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let matrix = match validate_and_fixup(&init) {
        Ok(matrix) => matrix,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let output = &config.output;
    let values = matrix.to_array();
    let text = match (output.format, array) {
        (OutputFormat::Json, true) => to_json(&values, output),
        (OutputFormat::Json, false) => to_json(&matrix, output),
        (OutputFormat::Text, true) => Ok(values
            .iter()
            .map(|v| format_number(*v, output))
            .collect::<Vec<_>>()
            .join(" ")),
        (OutputFormat::Text, false) => Ok(format_call(matrix.css_function_name(), &values, output)),
    };

    match text {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn read_source(json: Option<&str>, file: Option<&Path>) -> io::Result<String> {
    if let Some(json) = json {
        return Ok(json.to_string());
    }
    if let Some(path) = file {
        return fs::read_to_string(path);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
