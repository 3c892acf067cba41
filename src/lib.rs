//! domgeom - Geometry helpers for DOM matrices and CSS transforms
//!
//! This library provides functionality to:
//! - Validate and fix up `DOMMatrixInit` records into 2D or 3D matrices
//! - Parse CSS transform lists into unit-normalized function calls

pub mod cli;
pub mod config;
pub mod matrix;
pub mod transforms;

pub use matrix::{validate_and_fixup, DomMatrixInit, MatrixInitError, NormalizedMatrix};
pub use transforms::{parse_transform_list, TransformFunction, TransformKind, TransformListError};
