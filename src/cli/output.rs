//! Shared output formatting for CLI commands

use serde::Serialize;

use crate::config::OutputConfig;

/// Format a number, honoring the configured precision.
pub(crate) fn format_number(value: f64, output: &OutputConfig) -> String {
    match output.precision {
        Some(precision) => format!("{:.*}", precision, value),
        None => value.to_string(),
    }
}

/// Format a call as `name(p1, p2, ...)`.
pub(crate) fn format_call(name: &str, params: &[f64], output: &OutputConfig) -> String {
    let params: Vec<String> = params.iter().map(|p| format_number(*p, output)).collect();
    format!("{}({})", name, params.join(", "))
}

/// Serialize to JSON, pretty or compact per the config.
pub(crate) fn to_json<T: Serialize + ?Sized>(
    value: &T,
    output: &OutputConfig,
) -> Result<String, serde_json::Error> {
    if output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_precision() {
        let mut output = OutputConfig::default();
        assert_eq!(format_number(1.5, &output), "1.5");
        output.precision = Some(2);
        assert_eq!(format_number(1.5, &output), "1.50");
        output.precision = Some(0);
        assert_eq!(format_number(96.0, &output), "96");
    }

    #[test]
    fn test_format_call() {
        let output = OutputConfig::default();
        assert_eq!(format_call("scale", &[2.0, 0.5], &output), "scale(2, 0.5)");
        assert_eq!(format_call("matrix", &[], &output), "matrix()");
    }

    #[test]
    fn test_to_json_compact() {
        let output = OutputConfig { pretty: false, ..Default::default() };
        assert_eq!(to_json(&[1.0, 2.5], &output).unwrap(), "[1.0,2.5]");
    }
}
