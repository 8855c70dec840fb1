//! Property-based tests for the dense/sparse duality.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePolynomial;
    use crate::sparse::SparsePolynomial;
    use crate::tolerance::{is_not_zero, EPS};

    #[allow(clippy::approx_constant)]
    const SAMPLE_POINTS: [f64; 6] = [-2.0, -1.0, 0.0, 0.5, 1.0, 3.14];

    // Coefficients with plenty of exact zeros and sub-tolerance noise
    fn coeff() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(0.0),
            (-1.0e-7..1.0e-7),
            (-100i32..100i32).prop_map(f64::from),
            (-10.0..10.0),
        ]
    }

    fn dense_poly() -> impl Strategy<Value = DensePolynomial> {
        proptest::collection::vec(coeff(), 0..=12).prop_map(DensePolynomial::from)
    }

    // Integer coefficients, where tolerance never changes an outcome
    fn int_dense_poly() -> impl Strategy<Value = DensePolynomial> {
        proptest::collection::vec(prop_oneof![Just(0.0), (-3i32..3i32).prop_map(f64::from)], 0..=8)
            .prop_map(DensePolynomial::from)
    }

    // Rounding slack plus the contribution of every term conversion drops
    fn delta(p: &DensePolynomial, x: f64) -> f64 {
        let term = |i: usize, c: f64| (c * x.powi(i as i32)).abs();
        let magnitude: f64 = p.iter().enumerate().map(|(i, &c)| term(i, c)).sum();
        let dropped: f64 = p
            .iter()
            .enumerate()
            .filter(|&(_, &c)| !is_not_zero(c, EPS))
            .map(|(i, &c)| term(i, c))
            .sum();
        1.0e-9 * (1.0 + magnitude) + dropped
    }

    proptest! {
        // Conversion

        #[test]
        fn conversion_preserves_eval(d in dense_poly()) {
            let s = SparsePolynomial::from_dense(&d);
            for x in SAMPLE_POINTS {
                let diff = (d.eval(x) - s.eval(x)).abs();
                prop_assert!(diff <= delta(&d, x), "x = {}, diff = {}", x, diff);
            }
        }

        #[test]
        fn conversion_filters_zeros(d in dense_poly()) {
            let s = SparsePolynomial::from_dense(&d);
            let expected = d.iter().filter(|&&c| is_not_zero(c, EPS)).count();

            prop_assert_eq!(s.n(), d.len());
            prop_assert_eq!(s.nz(), expected);
            prop_assert!(s.terms().iter().all(|t| is_not_zero(*t.value(), EPS)));
            prop_assert!(s.terms().windows(2).all(|w| w[0].index() < w[1].index()));
        }

        #[test]
        fn conversion_keeps_rendering(d in dense_poly()) {
            let s = SparsePolynomial::from_dense(&d);
            let dense_line = d.render();
            let sparse_line = s.render();
            let dense_terms = dense_line.split_once(": ").map(|(_, t)| t);
            let sparse_terms = sparse_line.split_once(": ").map(|(_, t)| t);
            prop_assert_eq!(dense_terms, sparse_terms);
        }

        #[test]
        fn to_dense_round_trip(d in dense_poly()) {
            let back = d.to_sparse().to_dense();
            prop_assert_eq!(back.len(), d.len());
            prop_assert!(back.is_equal(&d));
        }

        // Equality

        #[test]
        fn equality_reflexive(d in dense_poly()) {
            let s = d.to_sparse();
            prop_assert!(d.is_equal(&d));
            prop_assert!(s.is_equal(&s));
            prop_assert!(s.is_equal_dense(&d));
            prop_assert!(d.is_equal_sparse(&s));
        }

        #[test]
        fn equality_symmetric(a in dense_poly(), b in dense_poly()) {
            let sa = a.to_sparse();
            let sb = b.to_sparse();
            prop_assert_eq!(a.is_equal(&b), b.is_equal(&a));
            prop_assert_eq!(sa.is_equal(&sb), sb.is_equal(&sa));
            prop_assert_eq!(sa.is_equal_dense(&b), b.is_equal_sparse(&sa));
        }

        #[test]
        fn equality_agrees_across_representations(a in int_dense_poly(), b in int_dense_poly()) {
            let dense_eq = a.is_equal(&b);
            prop_assert_eq!(a.to_sparse().is_equal(&b.to_sparse()), dense_eq);
            prop_assert_eq!(a.to_sparse().is_equal_dense(&b), dense_eq);
        }

        #[test]
        fn equality_ignores_zero_padding(d in dense_poly(), pad in 0usize..6) {
            let mut coeffs = d.coeffs().to_vec();
            coeffs.extend(std::iter::repeat(0.0).take(pad));
            let padded = DensePolynomial::from(coeffs);

            prop_assert!(d.is_equal(&padded));
            prop_assert!(d.to_sparse().is_equal(&padded.to_sparse()));
            prop_assert!(d.to_sparse().is_equal_dense(&padded));
        }

        // Text reader

        #[test]
        fn parse_reads_coefficients(coeffs in proptest::collection::vec(-1000i32..1000i32, 0..=8)) {
            let mut text = coeffs.len().to_string();
            for c in &coeffs {
                text.push(' ');
                text.push_str(&c.to_string());
            }

            let p: DensePolynomial = text.parse().unwrap();
            let expected: Vec<f64> = coeffs.into_iter().map(f64::from).collect();
            prop_assert_eq!(p.coeffs(), expected.as_slice());
        }
    }
}
