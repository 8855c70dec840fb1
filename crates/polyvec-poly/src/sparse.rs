//! Sparse univariate polynomials.
//!
//! Only the terms whose coefficient is not zero are stored, each tagged
//! with its exponent. The polynomial also remembers `n`, the size of the
//! dense polynomial it stands for.

use std::cmp::Ordering;
use std::fmt;
use std::io;

use polyvec_containers::{IndexedValue, Vector};

use crate::dense::DensePolynomial;
use crate::error::PolyError;
use crate::format;
use crate::real::Real;
use crate::tolerance::{is_not_zero, within};

/// A sparse univariate polynomial.
///
/// Terms are stored in strictly increasing exponent order, every exponent
/// is below `n`, and `nz` is always the number of stored terms.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SparsePolynomial<R: Real = f64> {
    /// Non-zero terms in increasing exponent order.
    terms: Vector<IndexedValue<R>>,
    /// Size of the equivalent dense polynomial.
    n: usize,
}

impl<R: Real> SparsePolynomial<R> {
    /// Creates the polynomial of size `n` with no stored terms.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            terms: Vector::default(),
            n,
        }
    }

    /// Converts a dense polynomial with the default tolerance.
    #[must_use]
    pub fn from_dense(dense: &DensePolynomial<R>) -> Self {
        Self::from_dense_with(dense, R::EPS)
    }

    /// Converts a dense polynomial in a single pass over its coefficients.
    ///
    /// A coefficient is kept iff [`is_not_zero`] holds for it, and kept
    /// terms are appended in exponent order.
    #[must_use]
    #[tracing::instrument(skip_all, name = "SparsePolynomial::from_dense", fields(n = dense.len()))]
    pub fn from_dense_with(dense: &DensePolynomial<R>, eps: R) -> Self {
        let terms: Vector<_> = dense
            .iter()
            .enumerate()
            .filter(|&(_, &c)| is_not_zero(c, eps))
            .map(|(i, &c)| IndexedValue::new(i, c))
            .collect();

        let sparse = Self {
            terms,
            n: dense.len(),
        };
        tracing::debug!(n = sparse.n, nz = sparse.nz(), "converted dense polynomial");
        sparse
    }

    /// Creates a polynomial of size `n` from already-indexed terms.
    ///
    /// Coefficients are stored as given; no zero filtering is applied.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnsortedTerms`] if the exponents are not strictly
    /// increasing and [`PolyError::IndexOutOfBounds`] if an exponent is not
    /// below `n`.
    pub fn from_terms<I>(n: usize, terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = IndexedValue<R>>,
    {
        let mut stored = Vector::default();
        let mut previous: Option<usize> = None;

        for term in terms {
            let index = term.index();
            if index >= n {
                return Err(PolyError::IndexOutOfBounds { index, n });
            }
            if let Some(previous) = previous.filter(|&p| p >= index) {
                return Err(PolyError::UnsortedTerms { previous, index });
            }
            previous = Some(index);
            stored.push(term);
        }

        Ok(Self { terms: stored, n })
    }

    /// Returns the size of the equivalent dense polynomial.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn nz(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no terms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the stored terms in exponent order.
    #[must_use]
    pub fn terms(&self) -> &[IndexedValue<R>] {
        self.terms.as_slice()
    }

    /// Returns the `i`-th stored term.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.nz()`.
    #[must_use]
    pub fn at(&self, i: usize) -> &IndexedValue<R> {
        self.terms.at(i)
    }

    /// Returns the `i`-th stored term.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Container`] if `i >= self.nz()`.
    pub fn try_at(&self, i: usize) -> Result<&IndexedValue<R>, PolyError> {
        Ok(self.terms.try_at(i)?)
    }

    /// Expands into a dense polynomial of size `n`.
    #[must_use]
    pub fn to_dense(&self) -> DensePolynomial<R> {
        let mut coeffs = vec![R::zero(); self.n];
        for term in &self.terms {
            coeffs[term.index()] = *term.value();
        }
        DensePolynomial::from_coeffs(coeffs)
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Runs in time proportional to `nz`, independent of `n`.
    #[must_use]
    #[tracing::instrument(skip_all, name = "SparsePolynomial::eval", fields(n = self.n, nz = self.nz()))]
    pub fn eval(&self, x: R) -> R {
        self.terms.iter().fold(R::zero(), |acc, term| {
            acc + *term.value() * num_traits::pow(x, term.index())
        })
    }

    /// Compares against another sparse polynomial with the default tolerance.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_equal_with(other, R::EPS)
    }

    /// Compares against another sparse polynomial.
    ///
    /// Terms are merged by exponent. An exponent missing from one side
    /// counts as a zero coefficient there, so stored terms within `eps` of
    /// zero never make two polynomials unequal.
    #[must_use]
    pub fn is_equal_with(&self, other: &Self, eps: R) -> bool {
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            let (a, b) = match (lhs.peek().copied(), rhs.peek().copied()) {
                (None, None) => return true,
                (Some(p), None) => {
                    lhs.next();
                    (*p.value(), R::zero())
                }
                (None, Some(q)) => {
                    rhs.next();
                    (R::zero(), *q.value())
                }
                (Some(p), Some(q)) => match p.index().cmp(&q.index()) {
                    Ordering::Less => {
                        lhs.next();
                        (*p.value(), R::zero())
                    }
                    Ordering::Greater => {
                        rhs.next();
                        (R::zero(), *q.value())
                    }
                    Ordering::Equal => {
                        lhs.next();
                        rhs.next();
                        (*p.value(), *q.value())
                    }
                },
            };

            if !within(a, b, eps) {
                return false;
            }
        }
    }

    /// Compares against a dense polynomial with the default tolerance.
    #[must_use]
    pub fn is_equal_dense(&self, dense: &DensePolynomial<R>) -> bool {
        self.is_equal_dense_with(dense, R::EPS)
    }

    /// Compares against a dense polynomial.
    ///
    /// Each stored term is compared with the dense coefficient at its
    /// exponent, and every dense coefficient without a stored term must be
    /// within `eps` of zero.
    #[must_use]
    pub fn is_equal_dense_with(&self, dense: &DensePolynomial<R>, eps: R) -> bool {
        let unlisted_zero = |from: usize, to: usize| {
            (from..to.min(dense.len())).all(|j| !is_not_zero(dense.coeff(j), eps))
        };

        let mut next = 0;
        for term in &self.terms {
            let index = term.index();
            if !unlisted_zero(next, index) || !within(*term.value(), dense.coeff(index), eps) {
                return false;
            }
            next = index + 1;
        }

        unlisted_zero(next, dense.len())
    }

    /// Renders as `N(NZ): [ c x^e + ... ]`.
    ///
    /// Every stored term is rendered; no tolerance filtering is applied.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered line followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_line<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl<R: Real> From<&DensePolynomial<R>> for SparsePolynomial<R> {
    fn from(dense: &DensePolynomial<R>) -> Self {
        Self::from_dense(dense)
    }
}

impl<R: Real> fmt::Display for SparsePolynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): ", self.n, self.nz())?;
        format::write_terms(
            f,
            self.terms
                .iter()
                .map(|term| (term.index(), term.value().as_f64())),
        )
    }
}
