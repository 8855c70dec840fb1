//! Polynomial errors.

use polyvec_containers::ContainerError;
use thiserror::Error;

/// Errors from fallible polynomial construction and access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error("term index {index} does not follow index {previous}")]
    UnsortedTerms { previous: usize, index: usize },

    #[error("term index {index} is outside a polynomial of size {n}")]
    IndexOutOfBounds { index: usize, n: usize },

    #[error("empty input")]
    Empty,

    #[error("invalid size `{0}`")]
    InvalidSize(String),

    #[error("negative size {0}")]
    NegativeSize(i64),

    #[error("invalid coefficient `{token}` at position {position}")]
    InvalidCoefficient { position: usize, token: String },

    #[error("expected {expected} coefficients, found {found}")]
    MissingCoefficients { expected: usize, found: usize },

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}
