//! CSS transform-list parsing
//!
//! Parses CSS transform strings like `translate(10px, 5px) rotate(90deg) scale(2)`
//! into [`TransformFunction`]s, one per function, in source order.

use super::ast::{parse_value, ValueNode};
use super::signature::{Argument, TransformKind};
use super::types::{TransformError, TransformFunction, TransformListError};

/// Parse a CSS transform-list string.
///
/// Lengths come back in pixels and angles in degrees. Any failure (tokenizer,
/// unknown function, wrong arity or argument type, unknown unit, percentage)
/// is reported as a single [`TransformListError`] carrying the input string.
///
/// # Example
///
/// ```
/// use domgeom::transforms::parse_transform_list;
///
/// let calls = parse_transform_list("translateX(10px) rotate(0.5turn)").unwrap();
/// assert_eq!(calls.len(), 2);
/// assert_eq!(calls[0].name(), "translatex");
/// assert_eq!(calls[1].params, vec![180.0]);
///
/// assert!(parse_transform_list("translateX(1%)").is_err());
/// ```
pub fn parse_transform_list(css: &str) -> Result<Vec<TransformFunction>, TransformListError> {
    parse_value(css)
        .and_then(|root| visit_value(&root))
        .map_err(|err| TransformListError::new(css, err))
}

/// Walk a value tree whose root holds transform functions separated by whitespace.
pub fn visit_value(node: &ValueNode) -> Result<Vec<TransformFunction>, TransformError> {
    let children = match node {
        ValueNode::Value { children } => children,
        other => return Err(TransformError::UnexpectedNode(other.kind().to_string())),
    };

    let mut functions = Vec::new();
    for child in children {
        match child {
            ValueNode::WhiteSpace => {}
            ValueNode::Function { name, children } => {
                functions.push(visit_function(name, children)?);
            }
            other => return Err(TransformError::UnexpectedNode(other.kind().to_string())),
        }
    }

    Ok(functions)
}

/// Validate one function node and convert its arguments.
fn visit_function(name: &str, children: &[ValueNode]) -> Result<TransformFunction, TransformError> {
    let name = name.to_ascii_lowercase();
    let kind =
        TransformKind::from_name(&name).ok_or_else(|| TransformError::UnknownFunction(name))?;

    let mut args = Vec::new();
    for child in children {
        match child {
            ValueNode::WhiteSpace => {}
            ValueNode::Number { value } => args.push(Argument::Number(*value)),
            ValueNode::Dimension { value, unit } => {
                args.push(Argument::Dimension { value: *value, unit: unit.as_str() })
            }
            ValueNode::Percentage { .. } => return Err(TransformError::RelativeLength),
            ValueNode::Function { name, children } => {
                args.push(Argument::Call(visit_function(name, children)?));
            }
            // Separators and anything else between arguments
            _ => {}
        }
    }

    Ok(TransformFunction::new(kind, kind.validate(&args)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(css: &str) -> Vec<TransformFunction> {
        parse_transform_list(css).unwrap()
    }

    fn parse_err(css: &str) -> TransformError {
        parse_transform_list(css).unwrap_err().source
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
    }

    #[test]
    fn test_parse_matrix() {
        let result = parse("matrix(1,0,0,1,0,0)");
        assert_eq!(
            result,
            vec![TransformFunction::new(TransformKind::Matrix, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0])]
        );
    }

    #[test]
    fn test_parse_matrix3d() {
        let css = "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 10, 20, 30, 1)";
        let result = parse(css);
        assert_eq!(result[0].kind, TransformKind::Matrix3d);
        assert_eq!(result[0].params.len(), 16);
        assert_eq!(&result[0].params[12..], &[10.0, 20.0, 30.0, 1.0]);
    }

    #[test]
    fn test_parse_translate_units() {
        assert_eq!(parse("translateX(1in)")[0].params, vec![96.0]);
        assert_eq!(parse("translate(10px, 1pc)")[0].params, vec![10.0, 16.0]);
        assert_eq!(parse("translate3d(1px, 2px, 72pt)")[0].params, vec![1.0, 2.0, 96.0]);
        assert_eq!(parse("translateY(1cm)")[0].params, vec![96.0 / 2.54]);
        assert_eq!(parse("translateZ(4q)")[0].params, vec![(4.0 * 96.0 / 2.54) / 40.0]);
        assert_eq!(parse("perspective(10mm)")[0].params, vec![(10.0 * 96.0 / 2.54) / 10.0]);
    }

    #[test]
    fn test_parse_rotate_units() {
        assert_eq!(parse("rotate(0.5turn)")[0].params, vec![180.0]);
        assert_eq!(parse("rotate(45deg)")[0].params, vec![45.0]);
        assert_eq!(parse("rotateX(200grad)")[0].params, vec![200.0 * 360.0 / 400.0]);
        assert_eq!(
            parse("rotateY(1rad)")[0].params,
            vec![1.0 * (180.0 / std::f64::consts::PI)]
        );
    }

    #[test]
    fn test_parse_rotate3d() {
        let result = parse("rotate3d(1, 1, 0, 90deg)");
        assert_eq!(result[0].params, vec![1.0, 1.0, 0.0, 90.0]);
    }

    #[test]
    fn test_parse_scale_and_skew() {
        assert_eq!(parse("scale(2)")[0].params, vec![2.0]);
        assert_eq!(parse("scale(2, 0.5)")[0].params, vec![2.0, 0.5]);
        assert_eq!(parse("scale3d(1, 2, 3)")[0].params, vec![1.0, 2.0, 3.0]);
        assert_eq!(parse("skew(10deg, 20deg)")[0].params, vec![10.0, 20.0]);
        assert_eq!(parse("skewY(0.25turn)")[0].params, vec![90.0]);
    }

    #[test]
    fn test_parse_names_are_lowercased() {
        let result = parse("TranslateX(1px) SCALEY(3)");
        assert_eq!(result[0].name(), "translatex");
        assert_eq!(result[1].name(), "scaley");
    }

    #[test]
    fn test_parse_preserves_order() {
        let result = parse("translateX(1px) rotateZ(10deg)");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].kind, TransformKind::TranslateX);
        assert_eq!(result[1].kind, TransformKind::RotateZ);
    }

    #[test]
    fn test_parse_functions_without_whitespace() {
        let result = parse("scale(2)rotate(90deg)");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_percentage_rejected() {
        assert_eq!(parse_err("translateX(1%)"), TransformError::RelativeLength);
        assert_eq!(parse_err("scale(50%)"), TransformError::RelativeLength);
    }

    #[test]
    fn test_arity_errors() {
        assert!(matches!(
            parse_err("scale(1,2,3)"),
            TransformError::Arity { function: "scale", received: 3 }
        ));
        assert!(matches!(
            parse_err("rotate3d(1,0,0)"),
            TransformError::Arity { function: "rotate3d", received: 3 }
        ));
        assert!(matches!(parse_err("matrix()"), TransformError::Arity { received: 0, .. }));
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(parse_err("foo(1)"), TransformError::UnknownFunction("foo".to_string()));
    }

    #[test]
    fn test_unknown_function_checked_before_arguments() {
        assert_eq!(parse_err("Foo(1%)"), TransformError::UnknownFunction("foo".to_string()));
    }

    #[test]
    fn test_argument_type_errors() {
        assert!(matches!(parse_err("translateX(10)"), TransformError::ArgumentType { .. }));
        assert!(matches!(parse_err("rotate(10px)"), TransformError::ArgumentType { .. }));
        assert!(matches!(parse_err("scale(2px)"), TransformError::ArgumentType { .. }));
    }

    #[test]
    fn test_unlisted_unit_is_rejected_by_type() {
        let em = TransformError::ArgumentType {
            kind: "Dimension".to_string(),
            unit: Some("em".to_string()),
        };
        assert_eq!(parse_err("translateX(2em)"), em);
        assert_eq!(parse_err("scale(2em)"), em);
    }

    #[test]
    fn test_unit_tags_must_be_lowercase() {
        assert_eq!(parse_err("translateX(1IN)"), TransformError::UnknownUnit("IN".to_string()));
        assert_eq!(parse_err("rotate(90DEG)"), TransformError::UnknownUnit("DEG".to_string()));
    }

    #[test]
    fn test_unexpected_top_level_node() {
        assert_eq!(parse_err("none"), TransformError::UnexpectedNode("Identifier".to_string()));
        assert_eq!(parse_err("10px"), TransformError::UnexpectedNode("Dimension".to_string()));
        assert_eq!(
            parse_err("scale(2), rotate(1deg)"),
            TransformError::UnexpectedNode("Operator".to_string())
        );
    }

    #[test]
    fn test_visit_value_requires_value_root() {
        let err = visit_value(&ValueNode::WhiteSpace).unwrap_err();
        assert_eq!(err, TransformError::UnexpectedNode("WhiteSpace".to_string()));
    }

    #[test]
    fn test_nested_function_is_visited_then_rejected() {
        assert_eq!(
            parse_err("scale(scale(2))"),
            TransformError::ArgumentType { kind: "Function".to_string(), unit: None }
        );
        assert_eq!(parse_err("scale(calc(2))"), TransformError::UnknownFunction("calc".to_string()));
    }

    #[test]
    fn test_syntax_error_is_wrapped() {
        let err = parse_transform_list("scale(2))").unwrap_err();
        assert_eq!(err.input, "scale(2))");
        assert!(matches!(err.kind(), TransformError::Syntax(_)));
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse_transform_list("rotate(1px)").unwrap_err();
        assert_eq!(err.input, "rotate(1px)");
        assert!(err.to_string().contains("rotate(1px)"));
    }
}
