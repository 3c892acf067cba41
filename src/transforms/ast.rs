//! Generic CSS value tree
//!
//! [`parse_value`] runs the `cssparser` tokenizer over a value string and
//! builds a small tree of [`ValueNode`]s. The tree knows nothing about
//! transforms; [`super::css`] walks it.

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use super::types::TransformError;

/// A node of a parsed CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    /// Root of a value
    Value { children: Vec<ValueNode> },
    Function { name: String, children: Vec<ValueNode> },
    WhiteSpace,
    Number { value: f64 },
    Dimension { value: f64, unit: String },
    /// `value` is the number written before the `%`
    Percentage { value: f64 },
    /// Separators and delimiters such as `,` and `/`
    Operator(String),
    Identifier(String),
    /// Any other token or block, labelled with its kind
    Other(&'static str),
}

impl ValueNode {
    /// Name of the node kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueNode::Value { .. } => "Value",
            ValueNode::Function { .. } => "Function",
            ValueNode::WhiteSpace => "WhiteSpace",
            ValueNode::Number { .. } => "Number",
            ValueNode::Dimension { .. } => "Dimension",
            ValueNode::Percentage { .. } => "Percentage",
            ValueNode::Operator(_) => "Operator",
            ValueNode::Identifier(_) => "Identifier",
            ValueNode::Other(kind) => *kind,
        }
    }
}

/// Tokenize `css` and build its value tree.
///
/// Fails with [`TransformError::Syntax`] on tokens that cannot appear in a
/// value (stray closing brackets, bad strings or urls).
pub fn parse_value(css: &str) -> Result<ValueNode, TransformError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let children = parse_children(&mut parser).map_err(syntax_error)?;
    Ok(ValueNode::Value { children })
}

fn parse_children<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> Result<Vec<ValueNode>, ParseError<'i, ()>> {
    let mut children = Vec::new();

    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(err) if matches!(err.kind, BasicParseErrorKind::EndOfInput) => break,
            Err(err) => return Err(err.into()),
        };
        let text = parser.slice_from(start);

        let node = match token {
            Token::WhiteSpace(_) | Token::Comment(_) => ValueNode::WhiteSpace,
            Token::Number { value, .. } => ValueNode::Number { value: precise_number(text, 0, value) },
            Token::Dimension { value, ref unit, .. } => ValueNode::Dimension {
                value: precise_number(text, unit.len(), value),
                unit: unit.to_string(),
            },
            Token::Percentage { unit_value, .. } => {
                ValueNode::Percentage { value: precise_number(text, 1, unit_value * 100.0) }
            }
            Token::Function(ref name) => {
                let name = name.to_string();
                let children = parser.parse_nested_block(|nested| parse_children(nested))?;
                ValueNode::Function { name, children }
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => {
                parser.parse_nested_block(|nested| parse_children(nested))?;
                ValueNode::Other("Block")
            }
            Token::Comma => ValueNode::Operator(",".to_string()),
            Token::Colon => ValueNode::Operator(":".to_string()),
            Token::Semicolon => ValueNode::Operator(";".to_string()),
            Token::Delim(c) => ValueNode::Operator(c.to_string()),
            Token::Ident(ref name) => ValueNode::Identifier(name.to_string()),
            Token::QuotedString(_) => ValueNode::Other("String"),
            Token::Hash(_) | Token::IDHash(_) => ValueNode::Other("Hash"),
            Token::UnquotedUrl(_) => ValueNode::Other("Url"),
            Token::AtKeyword(_) => ValueNode::Other("AtKeyword"),
            Token::BadUrl(_)
            | Token::BadString(_)
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket => return Err(parser.new_unexpected_token_error(token)),
            _ => ValueNode::Other("Raw"),
        };

        children.push(node);
    }

    Ok(children)
}

/// Re-read a numeric token from its source text at full precision.
///
/// The tokenizer stores numbers as `f32`; `fallback` is used only when the
/// text cannot be split cleanly (e.g. an escaped unit).
fn precise_number(text: &str, suffix_len: usize, fallback: f32) -> f64 {
    text.len()
        .checked_sub(suffix_len)
        .and_then(|end| text.get(..end))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or_else(|| f64::from(fallback))
}

fn syntax_error(err: ParseError<'_, ()>) -> TransformError {
    let reason = match err.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {:?}", token)
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_string()
        }
        ParseErrorKind::Basic(other) => format!("{:?}", other),
        ParseErrorKind::Custom(()) => "invalid value".to_string(),
    };
    TransformError::Syntax(format!(
        "{} at line {}, column {}",
        reason,
        err.location.line + 1,
        err.location.column
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn children(css: &str) -> Vec<ValueNode> {
        match parse_value(css).unwrap() {
            ValueNode::Value { children } => children,
            other => panic!("expected Value root, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value() {
        assert!(children("").is_empty());
    }

    #[test]
    fn test_function_with_arguments() {
        let nodes = children("translate(10px, 2.5)");
        assert_eq!(
            nodes,
            vec![ValueNode::Function {
                name: "translate".to_string(),
                children: vec![
                    ValueNode::Dimension { value: 10.0, unit: "px".to_string() },
                    ValueNode::Operator(",".to_string()),
                    ValueNode::WhiteSpace,
                    ValueNode::Number { value: 2.5 },
                ],
            }]
        );
    }

    #[test]
    fn test_whitespace_between_functions() {
        let nodes = children("scale(2) rotate(1turn)");
        let kinds: Vec<_> = nodes.iter().map(ValueNode::kind).collect();
        assert_eq!(kinds, vec!["Function", "WhiteSpace", "Function"]);
    }

    #[test]
    fn test_numbers_keep_double_precision() {
        let nodes = children("0.1");
        assert_eq!(nodes, vec![ValueNode::Number { value: 0.1 }]);

        let nodes = children("-1.25e2deg");
        assert_eq!(nodes, vec![ValueNode::Dimension { value: -125.0, unit: "deg".to_string() }]);
    }

    #[test]
    fn test_percentage_and_identifier() {
        let nodes = children("50% auto");
        assert_eq!(
            nodes,
            vec![
                ValueNode::Percentage { value: 50.0 },
                ValueNode::WhiteSpace,
                ValueNode::Identifier("auto".to_string()),
            ]
        );
    }

    #[test]
    fn test_unit_case_is_preserved() {
        assert_eq!(
            children("1PX"),
            vec![ValueNode::Dimension { value: 1.0, unit: "PX".to_string() }]
        );
    }

    #[test]
    fn test_stray_close_paren_is_syntax_error() {
        let err = parse_value("scale(2))").unwrap_err();
        assert!(matches!(err, TransformError::Syntax(_)));
    }

    #[test]
    fn test_nested_function() {
        let nodes = children("scale(calc(2))");
        assert_eq!(
            nodes,
            vec![ValueNode::Function {
                name: "scale".to_string(),
                children: vec![ValueNode::Function {
                    name: "calc".to_string(),
                    children: vec![ValueNode::Number { value: 2.0 }],
                }],
            }]
        );
    }
}
