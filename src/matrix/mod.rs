//! Matrix initialization records
//!
//! Validates loosely typed `DOMMatrixInit` records and resolves them into a
//! [`NormalizedMatrix`] whose flat array feeds matrix construction.

pub mod error;
pub mod init;

pub use error::MatrixInitError;
pub use init::{validate_and_fixup, DomMatrixInit, Field, NormalizedMatrix, KNOWN_KEYS};
