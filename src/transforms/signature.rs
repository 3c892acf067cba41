//! Transform function signatures
//!
//! Every supported transform function is a [`TransformKind`] variant. The
//! variant supplies its arity and parameter types as plain data, and
//! [`TransformKind::validate`] checks and converts arguments for all of them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::types::{TransformError, TransformFunction};
use super::units::{convert, AngleUnit, LengthUnit};

/// The closed set of CSS transform functions (Transforms 1 and 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Matrix,
    Matrix3d,
    Translate,
    TranslateX,
    TranslateY,
    TranslateZ,
    Translate3d,
    Scale,
    ScaleX,
    ScaleY,
    ScaleZ,
    Scale3d,
    Rotate,
    RotateX,
    RotateY,
    RotateZ,
    Rotate3d,
    Skew,
    SkewX,
    SkewY,
    Perspective,
}

/// Accepted argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive on both ends
    Range(usize, usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => count >= min && count <= max,
        }
    }
}

/// What a single parameter position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Unitless number
    Number,
    /// Absolute length, converted to px
    Length,
    /// Angle, converted to deg
    Angle,
}

/// A raw argument collected from inside a function's parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<'a> {
    Number(f64),
    Dimension { value: f64, unit: &'a str },
    /// Result of a nested function
    Call(TransformFunction),
}

impl ParamType {
    /// Check `arg` against this parameter type and convert it to its canonical value.
    pub fn convert(self, arg: &Argument<'_>) -> Result<f64, TransformError> {
        match arg {
            Argument::Call(_) => {
                Err(TransformError::ArgumentType { kind: "Function".to_string(), unit: None })
            }
            Argument::Number(value) => match self {
                ParamType::Number => Ok(*value),
                _ => Err(TransformError::ArgumentType { kind: "Number".to_string(), unit: None }),
            },
            Argument::Dimension { value, unit } => {
                let accepted = match self {
                    ParamType::Number => false,
                    ParamType::Length => LengthUnit::is_known(unit),
                    ParamType::Angle => AngleUnit::is_known(unit),
                };
                if !accepted {
                    return Err(TransformError::ArgumentType {
                        kind: "Dimension".to_string(),
                        unit: Some(unit.to_string()),
                    });
                }
                convert(*value, unit)
            }
        }
    }
}

impl TransformKind {
    pub const ALL: [TransformKind; 21] = [
        TransformKind::Matrix,
        TransformKind::Matrix3d,
        TransformKind::Translate,
        TransformKind::TranslateX,
        TransformKind::TranslateY,
        TransformKind::TranslateZ,
        TransformKind::Translate3d,
        TransformKind::Scale,
        TransformKind::ScaleX,
        TransformKind::ScaleY,
        TransformKind::ScaleZ,
        TransformKind::Scale3d,
        TransformKind::Rotate,
        TransformKind::RotateX,
        TransformKind::RotateY,
        TransformKind::RotateZ,
        TransformKind::Rotate3d,
        TransformKind::Skew,
        TransformKind::SkewX,
        TransformKind::SkewY,
        TransformKind::Perspective,
    ];

    /// Look up a function name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<TransformKind> {
        TransformKind::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Lowercase name, as reported in parse results.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Matrix => "matrix",
            TransformKind::Matrix3d => "matrix3d",
            TransformKind::Translate => "translate",
            TransformKind::TranslateX => "translatex",
            TransformKind::TranslateY => "translatey",
            TransformKind::TranslateZ => "translatez",
            TransformKind::Translate3d => "translate3d",
            TransformKind::Scale => "scale",
            TransformKind::ScaleX => "scalex",
            TransformKind::ScaleY => "scaley",
            TransformKind::ScaleZ => "scalez",
            TransformKind::Scale3d => "scale3d",
            TransformKind::Rotate => "rotate",
            TransformKind::RotateX => "rotatex",
            TransformKind::RotateY => "rotatey",
            TransformKind::RotateZ => "rotatez",
            TransformKind::Rotate3d => "rotate3d",
            TransformKind::Skew => "skew",
            TransformKind::SkewX => "skewx",
            TransformKind::SkewY => "skewy",
            TransformKind::Perspective => "perspective",
        }
    }

    /// Spelling used by the CSS specifications, for diagnostics.
    pub fn css_name(self) -> &'static str {
        match self {
            TransformKind::TranslateX => "translateX",
            TransformKind::TranslateY => "translateY",
            TransformKind::TranslateZ => "translateZ",
            TransformKind::ScaleX => "scaleX",
            TransformKind::ScaleY => "scaleY",
            TransformKind::ScaleZ => "scaleZ",
            TransformKind::RotateX => "rotateX",
            TransformKind::RotateY => "rotateY",
            TransformKind::RotateZ => "rotateZ",
            TransformKind::SkewX => "skewX",
            TransformKind::SkewY => "skewY",
            other => other.name(),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            TransformKind::Matrix => Arity::Exact(6),
            TransformKind::Matrix3d => Arity::Exact(16),
            TransformKind::Translate | TransformKind::Scale | TransformKind::Skew => {
                Arity::Range(1, 2)
            }
            TransformKind::Translate3d | TransformKind::Scale3d => Arity::Exact(3),
            TransformKind::Rotate3d => Arity::Exact(4),
            TransformKind::TranslateX
            | TransformKind::TranslateY
            | TransformKind::TranslateZ
            | TransformKind::ScaleX
            | TransformKind::ScaleY
            | TransformKind::ScaleZ
            | TransformKind::Rotate
            | TransformKind::RotateX
            | TransformKind::RotateY
            | TransformKind::RotateZ
            | TransformKind::SkewX
            | TransformKind::SkewY
            | TransformKind::Perspective => Arity::Exact(1),
        }
    }

    /// Parameter type at `index`. Only `rotate3d` mixes types.
    pub fn param_type(self, index: usize) -> ParamType {
        match self {
            TransformKind::Matrix
            | TransformKind::Matrix3d
            | TransformKind::Scale
            | TransformKind::ScaleX
            | TransformKind::ScaleY
            | TransformKind::ScaleZ
            | TransformKind::Scale3d => ParamType::Number,
            TransformKind::Translate
            | TransformKind::TranslateX
            | TransformKind::TranslateY
            | TransformKind::TranslateZ
            | TransformKind::Translate3d
            | TransformKind::Perspective => ParamType::Length,
            TransformKind::Rotate3d if index < 3 => ParamType::Number,
            TransformKind::Rotate
            | TransformKind::RotateX
            | TransformKind::RotateY
            | TransformKind::RotateZ
            | TransformKind::Rotate3d
            | TransformKind::Skew
            | TransformKind::SkewX
            | TransformKind::SkewY => ParamType::Angle,
        }
    }

    /// Check the argument count, then check and convert each argument in order.
    pub fn validate(self, args: &[Argument<'_>]) -> Result<Vec<f64>, TransformError> {
        if !self.arity().accepts(args.len()) {
            return Err(TransformError::Arity { function: self.css_name(), received: args.len() });
        }

        args.iter().enumerate().map(|(i, arg)| self.param_type(i).convert(arg)).collect()
    }
}

impl FromStr for TransformKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformKind::from_name(s)
            .ok_or_else(|| TransformError::UnknownFunction(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
