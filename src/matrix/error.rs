//! Error types for matrix initialization

use thiserror::Error;

/// Error raised while validating a [`super::DomMatrixInit`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MatrixInitError {
    /// An alias and its canonical field are both set to different values
    #[error("invalid matrix init: '{alias}' ({alias_value}) does not match '{field}' ({field_value})")]
    ConflictingAlias { alias: &'static str, field: &'static str, alias_value: f64, field_value: f64 },

    /// `is2D` is true but a 3D-only component is not the identity value
    #[error("invalid 2D state: is2D is true but '{field}' is {value}")]
    Invalid2DState { field: &'static str, value: f64 },

    /// A flat array that is neither a 2D (6) nor a 3D (16) matrix
    #[error("invalid matrix array length {0}, expected 6 or 16")]
    InvalidArrayLength(usize),
}
