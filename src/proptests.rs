//! Property-based tests for the merge arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    use crate::poly::Polynomial;
    use crate::term::Term;

    const EVAL_POINTS: [f64; 5] = [-3.0, -0.5, 0.0, 1.0, 2.5];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
    }

    /// Builds a well-formed polynomial from an exponent -> coefficient map.
    ///
    /// `BTreeMap` keys are unique and ascending, so reversing them gives
    /// the strictly descending order the container requires.
    fn from_map(map: &BTreeMap<u32, i64>) -> Polynomial<i64> {
        let terms: Vec<Term<i64>> = map
            .iter()
            .rev()
            .map(|(&exp, &coeff)| Term::new(coeff, exp))
            .collect();
        Polynomial::from_terms(terms).expect("descending by construction")
    }

    // Strategy for well-formed polynomials with 1-6 terms.
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::btree_map(0u32..10, (-50i64..50).prop_filter("non-zero", |c| *c != 0), 1..=6)
            .prop_map(|m| from_map(&m))
    }

    // Strategy restricted to positive coefficients, so no cancellation
    // can occur anywhere in a sum.
    fn positive_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::btree_map(0u32..10, 1i64..50, 1..=6).prop_map(|m| from_map(&m))
    }

    proptest! {
        #[test]
        fn add_commutes_on_canonical_string(a in positive_poly(), b in positive_poly()) {
            let ab = a.add(&b).unwrap();
            let ba = b.add(&a).unwrap();
            prop_assert_eq!(ab.to_string(), ba.to_string());
        }

        #[test]
        fn sub_self_is_all_zero_coefficients(a in small_poly()) {
            let diff = a.sub(&a).unwrap();
            for term in diff.iter() {
                prop_assert_eq!(term.coeff, 0);
            }
            for x in EVAL_POINTS {
                prop_assert!(approx_eq(diff.eval(x), 0.0));
            }
        }

        #[test]
        fn eval_distributes_over_add(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b).unwrap();
            for x in EVAL_POINTS {
                prop_assert!(approx_eq(sum.eval(x), a.eval(x) + b.eval(x)));
            }
        }

        #[test]
        fn eval_distributes_over_sub(a in small_poly(), b in small_poly()) {
            let diff = a.sub(&b).unwrap();
            for x in EVAL_POINTS {
                prop_assert!(approx_eq(diff.eval(x), a.eval(x) - b.eval(x)));
            }
        }

        #[test]
        fn equality_is_reflexive(a in small_poly()) {
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(&a, &a.clone());
        }

        #[test]
        fn merge_results_stay_well_formed(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b).unwrap();
            prop_assert!(sum.is_well_formed());

            let diff = a.sub(&b).unwrap();
            prop_assert!(diff.is_well_formed());
        }

        #[test]
        fn merge_never_ends_in_zero_constant(a in small_poly(), b in small_poly()) {
            let diff = a.sub(&b).unwrap();
            if let Some(last) = diff.terms().last() {
                prop_assert!(!(last.coeff == 0 && last.exp == 0));
            }
        }
    }
}
