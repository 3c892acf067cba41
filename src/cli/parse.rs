//! Parse and convert command implementations

use std::process::ExitCode;

use serde_json::json;

use crate::config::{OutputConfig, OutputFormat};
use crate::transforms::{parse_transform_list, parse_value, Unit, ValueNode};

use super::output::{format_call, format_number, to_json};
use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the parse command
pub fn run_parse(css: &str, output: &OutputConfig) -> ExitCode {
    let calls = match parse_transform_list(css) {
        Ok(calls) => calls,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let text = match output.format {
        OutputFormat::Json => match to_json(&calls, output) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        OutputFormat::Text => calls
            .iter()
            .map(|call| format_call(call.name(), &call.params, output))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    if !text.is_empty() {
        println!("{}", text);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the convert command
pub fn run_convert(value: &str, output: &OutputConfig) -> ExitCode {
    let (magnitude, unit) = match single_dimension(value) {
        Some(dimension) => dimension,
        None => {
            eprintln!("Error: expected a single dimension such as '2.54cm' or '90deg', got '{}'", value);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let unit = match Unit::parse(&unit) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let converted = unit.to_canonical(magnitude);
    let canonical_unit = match unit {
        Unit::Length(_) => "px",
        Unit::Angle(_) => "deg",
    };

    let text = match output.format {
        OutputFormat::Json => {
            match to_json(&json!({ "value": converted, "unit": canonical_unit }), output) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
        OutputFormat::Text => format!("{}{}", format_number(converted, output), canonical_unit),
    };

    println!("{}", text);
    ExitCode::from(EXIT_SUCCESS)
}

/// The magnitude and unit of a value that is exactly one dimension.
fn single_dimension(value: &str) -> Option<(f64, String)> {
    let root = parse_value(value).ok()?;
    let children = match root {
        ValueNode::Value { children } => children,
        _ => return None,
    };

    let mut nodes = children.into_iter().filter(|node| *node != ValueNode::WhiteSpace);
    match (nodes.next(), nodes.next()) {
        (Some(ValueNode::Dimension { value, unit }), None) => Some((value, unit)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dimension() {
        assert_eq!(single_dimension(" 2.54cm "), Some((2.54, "cm".to_string())));
        assert_eq!(single_dimension("1px 2px"), None);
        assert_eq!(single_dimension("12"), None);
        assert_eq!(single_dimension("50%"), None);
    }
}
