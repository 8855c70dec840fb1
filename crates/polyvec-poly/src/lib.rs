//! # polyvec-poly
//!
//! Univariate polynomials with real coefficients in two representations.
//!
//! This crate provides:
//! - `DensePolynomial`: one coefficient per exponent, zeros included
//! - `SparsePolynomial`: only the non-zero terms, tagged with their exponent
//! - Dense-to-sparse conversion with a caller-supplied tolerance
//! - Tolerance-based equality within and across representations
//! - The `N: [ ... ]` / `N(NZ): [ ... ]` text rendering
//!
//! ## Zero Test
//!
//! Every conversion and comparison goes through [`is_not_zero`], so a term
//! dropped by conversion is exactly a term that equality treats as zero.
//!
//! ```
//! use polyvec_poly::{DensePolynomial, SparsePolynomial};
//!
//! let dense = DensePolynomial::from(vec![3.0, 0.0, 2.0]);
//! let sparse = SparsePolynomial::from_dense(&dense);
//!
//! assert_eq!(dense.to_string(), "3: [ 3 + 2 x^2 ]");
//! assert_eq!(sparse.to_string(), "3(2): [ 3 + 2 x^2 ]");
//! assert_eq!(sparse.eval(2.0), 11.0);
//! assert!(sparse.is_equal_dense(&dense));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;
mod format;
mod parse;
pub mod real;
pub mod sparse;
pub mod tolerance;

#[cfg(test)]
mod proptests;

pub use dense::DensePolynomial;
pub use error::PolyError;
pub use real::Real;
pub use sparse::SparsePolynomial;
pub use tolerance::{is_not_zero, EPS};
