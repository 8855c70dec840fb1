//! Dense univariate polynomials.
//!
//! A dense polynomial stores one coefficient per exponent, zeros included,
//! so position `i` always holds the coefficient of `x^i`.

use std::fmt;
use std::io;

use polyvec_containers::Vector;

use crate::error::PolyError;
use crate::format;
use crate::real::Real;
use crate::sparse::SparsePolynomial;
use crate::tolerance::{is_not_zero, within};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending exponent order and are never
/// normalized: the size given at construction is kept even when the
/// trailing coefficients are zero.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DensePolynomial<R: Real = f64> {
    /// Coefficients in ascending exponent order.
    coeffs: Vector<R>,
}

impl<R: Real> DensePolynomial<R> {
    /// Creates the polynomial of size `n` with every coefficient zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            coeffs: Vector::new(n),
        }
    }

    /// Creates a polynomial from coefficients in ascending exponent order.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self {
            coeffs: Vector::from_vec(coeffs),
        }
    }

    /// Returns the size `n` (number of stored coefficients).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of `x^i`, or zero past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.try_at(i).copied().unwrap_or_else(|_| R::zero())
    }

    /// Returns the coefficient stored at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn at(&self, i: usize) -> R {
        *self.coeffs.at(i)
    }

    /// Returns the coefficient stored at position `i`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Container`] if `i >= self.len()`.
    pub fn try_at(&self, i: usize) -> Result<R, PolyError> {
        Ok(*self.coeffs.try_at(i)?)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        self.coeffs.as_slice()
    }

    /// Returns an iterator over the coefficients in exponent order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.coeffs.iter()
    }

    /// Returns the highest exponent whose coefficient exceeds `eps`.
    ///
    /// Returns `None` when every coefficient is within `eps` of zero.
    #[must_use]
    pub fn degree(&self, eps: R) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| is_not_zero(c, eps))
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    #[tracing::instrument(skip_all, name = "DensePolynomial::eval", fields(n = self.len()))]
    pub fn eval(&self, x: R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, &c| acc * x + c)
    }

    /// Compares against another dense polynomial with the default tolerance.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_equal_with(other, R::EPS)
    }

    /// Compares against another dense polynomial.
    ///
    /// The shorter polynomial is padded with zeros, so a trailing run of
    /// zero coefficients never makes two polynomials unequal.
    #[must_use]
    pub fn is_equal_with(&self, other: &Self, eps: R) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| within(self.coeff(i), other.coeff(i), eps))
    }

    /// Compares against a sparse polynomial with the default tolerance.
    #[must_use]
    pub fn is_equal_sparse(&self, other: &SparsePolynomial<R>) -> bool {
        other.is_equal_dense_with(self, R::EPS)
    }

    /// Compares against a sparse polynomial.
    #[must_use]
    pub fn is_equal_sparse_with(&self, other: &SparsePolynomial<R>, eps: R) -> bool {
        other.is_equal_dense_with(self, eps)
    }

    /// Converts to the sparse representation with the default tolerance.
    #[must_use]
    pub fn to_sparse(&self) -> SparsePolynomial<R> {
        SparsePolynomial::from_dense(self)
    }

    /// Converts to the sparse representation, dropping every coefficient
    /// within `eps` of zero.
    #[must_use]
    pub fn to_sparse_with(&self, eps: R) -> SparsePolynomial<R> {
        SparsePolynomial::from_dense_with(self, eps)
    }

    /// Renders as `N: [ c0 + c1 x + c2 x^2 + ... ]` with the default tolerance.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(R::EPS)
    }

    /// Renders as `N: [ c0 + c1 x + c2 x^2 + ... ]`, omitting every term
    /// whose coefficient is within `eps` of zero.
    #[must_use]
    pub fn render_with(&self, eps: R) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, eps);
        out
    }

    /// Writes the rendered line followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_line<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    fn write_to<W: fmt::Write>(&self, out: &mut W, eps: R) -> fmt::Result {
        write!(out, "{}: ", self.len())?;
        format::write_terms(
            out,
            self.coeffs
                .iter()
                .enumerate()
                .filter(|&(_, &c)| is_not_zero(c, eps))
                .map(|(i, &c)| (i, c.as_f64())),
        )
    }
}

impl<R: Real> From<Vec<R>> for DensePolynomial<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl<R: Real> FromIterator<R> for DensePolynomial<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            coeffs: iter.into_iter().collect(),
        }
    }
}

impl<R: Real> fmt::Display for DensePolynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, R::EPS)
    }
}
