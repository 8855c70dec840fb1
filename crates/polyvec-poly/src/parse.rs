//! Reading dense polynomials from text.
//!
//! The accepted form is the whitespace-separated stream layout
//! `size c0 c1 ... c{size-1}`.

use std::str::FromStr;

use crate::dense::DensePolynomial;
use crate::error::PolyError;
use crate::real::Real;

impl<R: Real> FromStr for DensePolynomial<R> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let size_token = tokens.next().ok_or(PolyError::Empty)?;
        let size: i64 = size_token
            .parse()
            .map_err(|_| PolyError::InvalidSize(size_token.to_string()))?;
        let n = usize::try_from(size).map_err(|_| PolyError::NegativeSize(size))?;

        let mut coeffs = Vec::with_capacity(n);
        for position in 0..n {
            let token = tokens.next().ok_or(PolyError::MissingCoefficients {
                expected: n,
                found: position,
            })?;
            let value = token.parse::<R>().map_err(|_| PolyError::InvalidCoefficient {
                position,
                token: token.to_string(),
            })?;
            coeffs.push(value);
        }

        if let Some(extra) = tokens.next() {
            return Err(PolyError::TrailingInput(extra.to_string()));
        }

        Ok(Self::from_coeffs(coeffs))
    }
}
