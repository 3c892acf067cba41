//! Core transform types and error definitions
//!
//! Contains [`TransformFunction`], the unit-normalized record produced for each
//! function in a transform list, and the errors raised while building it.

use std::fmt;

use serde::Serialize;

use super::signature::TransformKind;

/// Errors that can occur while validating a single transform function
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// Function name outside the supported transform functions
    #[error("invalid transform function {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments for the function
    #[error("received invalid number of parameters for function {function} (got {received})")]
    Arity { function: &'static str, received: usize },

    /// Argument kind or unit does not fit the parameter type
    #[error(
        "received an unexpected param: {kind}{}",
        .unit.as_deref().map(|u| format!(" {}", u)).unwrap_or_default()
    )]
    ArgumentType { kind: String, unit: Option<String> },

    /// Percentages are relative and never accepted
    #[error("lengths must be absolute, not relative")]
    RelativeLength,

    /// Dimension unit that is neither an absolute length nor an angle
    #[error("received unknown dimension unit {0}")]
    UnknownUnit(String),

    /// Node kind that cannot appear at this position of the value tree
    #[error("encountered an unexpected node type {0}")]
    UnexpectedNode(String),

    /// Tokenizer failure
    #[error("syntax error: {0}")]
    Syntax(String),
}

/// A transform list that failed to parse.
///
/// Every failure below the entry point, whatever its depth, surfaces as this
/// one type. The underlying [`TransformError`] is available as the error
/// source and through [`TransformListError::kind`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to parse transform list {input:?}: {source}")]
pub struct TransformListError {
    /// The string that was being parsed
    pub input: String,
    #[source]
    pub source: TransformError,
}

impl TransformListError {
    pub fn new(input: impl Into<String>, source: TransformError) -> Self {
        Self { input: input.into(), source }
    }

    /// The failure that caused the parse to stop.
    pub fn kind(&self) -> &TransformError {
        &self.source
    }
}

/// One transform function with its arguments converted to canonical units.
///
/// Lengths are in pixels, angles in degrees, everything else unitless.
///
/// # Example
///
/// ```
/// use domgeom::transforms::{parse_transform_list, TransformKind};
///
/// let calls = parse_transform_list("translateX(1in)").unwrap();
/// assert_eq!(calls[0].kind, TransformKind::TranslateX);
/// assert_eq!(calls[0].name(), "translatex");
/// assert_eq!(calls[0].params, vec![96.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformFunction {
    #[serde(rename = "name")]
    pub kind: TransformKind,
    pub params: Vec<f64>,
}

impl TransformFunction {
    pub fn new(kind: TransformKind, params: Vec<f64>) -> Self {
        Self { kind, params }
    }

    /// Lowercase function name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")
    }
}
