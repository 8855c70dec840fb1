//! # polyvec
//!
//! Dense and sparse representations of univariate real polynomials.
//!
//! ## Features
//!
//! - **Dense**: one coefficient per exponent, zeros included
//! - **Sparse**: only non-zero terms, in increasing exponent order
//! - **Conversion**: a single zero-filtering pass with a caller tolerance
//! - **Equality**: tolerance-based and consistent across representations
//!
//! ## Quick Start
//!
//! ```rust
//! use polyvec::prelude::*;
//!
//! let dense: DensePolynomial = "3 3 0 2".parse()?;
//! let sparse = SparsePolynomial::from_dense(&dense);
//!
//! assert_eq!(sparse.to_string(), "3(2): [ 3 + 2 x^2 ]");
//! assert!(dense.is_equal_sparse(&sparse));
//! # Ok::<(), polyvec::poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyvec_containers as containers;
pub use polyvec_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyvec_containers::{IndexedValue, Vector};
    pub use polyvec_poly::{is_not_zero, DensePolynomial, Real, SparsePolynomial, EPS};
}
