//! The zero test shared by conversion and equality.

use crate::real::Real;

/// Default tolerance below which a coefficient is treated as zero.
pub const EPS: f64 = 1.0e-6;

/// Returns true if `|value| > eps`.
///
/// This is the only definition of "effectively zero" in the crate: the
/// dense-to-sparse scan keeps exactly the coefficients for which it holds,
/// and every equality check calls it on coefficient differences.
#[inline]
#[must_use]
pub fn is_not_zero<R: Real>(value: R, eps: R) -> bool {
    value.abs() > eps
}

/// Returns true if `|a - b| <= eps`.
#[inline]
#[must_use]
pub(crate) fn within<R: Real>(a: R, b: R, eps: R) -> bool {
    !is_not_zero(a - b, eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_zero_is_strict() {
        assert!(!is_not_zero(0.0, EPS));
        assert!(!is_not_zero(EPS, EPS));
        assert!(!is_not_zero(-EPS, EPS));
        assert!(is_not_zero(2.0 * EPS, EPS));
        assert!(is_not_zero(-1.0, EPS));
    }

    #[test]
    fn test_within() {
        assert!(within(1.0, 1.0 + 0.5e-6, EPS));
        assert!(!within(1.0, 1.1, EPS));
        assert!(within(1.0, 1.1, 0.2));
    }

    #[test]
    fn test_f32_tolerance() {
        assert!(!is_not_zero(1.0e-7_f32, <f32 as Real>::EPS));
        assert!(is_not_zero(1.0e-3_f32, <f32 as Real>::EPS));
    }
}
