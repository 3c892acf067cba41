//! CSS transform-list parsing
//!
//! Turns a `transform` value such as `"translateX(10px) rotate(45deg)"` into
//! an ordered list of [`TransformFunction`]s with unit-normalized arguments.
//!
//! # Module Structure
//!
//! - [`ast`] - Generic value tree built from the `cssparser` token stream
//! - [`css`] - Transform-list walker and the [`parse_transform_list`] entry point
//! - [`signature`] - Per-function arity and parameter types
//! - [`units`] - Length and angle conversion tables
//! - [`types`] - Result records and error definitions

pub mod ast;
pub mod css;
pub mod signature;
pub mod types;
pub mod units;

pub use ast::{parse_value, ValueNode};
pub use css::{parse_transform_list, visit_value};
pub use signature::{Argument, Arity, ParamType, TransformKind};
pub use types::{TransformError, TransformFunction, TransformListError};
pub use units::{convert, AngleUnit, LengthUnit, Unit};
