//! Real coefficient types.
//!
//! Polynomials are generic over [`Real`], in the same way the algebraic
//! structures of a computer algebra system are generic over a ring. Only
//! the IEEE floating-point types implement it.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::Float;

/// A real number usable as a polynomial coefficient.
///
/// # Laws
///
/// - `EPS` is finite and non-negative
/// - `as_f64` is exact for `f64` and widening for narrower types
pub trait Real: Float + Default + Debug + Display + FromStr + Send + Sync + 'static {
    /// The default tolerance for zero tests and equality.
    const EPS: Self;

    /// Widens the value to `f64` for rendering.
    fn as_f64(self) -> f64;
}

impl Real for f64 {
    const EPS: Self = crate::tolerance::EPS;

    fn as_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    const EPS: Self = 1.0e-6;

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}
