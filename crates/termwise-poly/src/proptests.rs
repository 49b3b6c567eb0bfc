//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::poly::Polynomial;

    // Strategy for well-formed polynomials: distinct powers taken
    // descending, paired with small coefficients. May be empty.
    fn sorted_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::btree_set(0u32..32, 0..8).prop_flat_map(|powers| {
            let coeffs = proptest::collection::vec(-100i64..100, powers.len());
            (Just(powers), coeffs).prop_map(|(powers, coeffs)| {
                Polynomial::from_terms(powers.into_iter().rev().zip(coeffs).map(|(p, c)| (c, p)))
            })
        })
    }

    fn coeff_at(p: &Polynomial<i64>, power: u32) -> i64 {
        p.terms()
            .iter()
            .find(|t| t.power == power)
            .map_or(0, |t| t.coeff)
    }

    proptest! {
        #[test]
        fn add_result_is_well_formed(p in sorted_poly(), q in sorted_poly()) {
            let sum = p.add(&q).unwrap();
            prop_assert!(sum.is_well_formed());
        }

        #[test]
        fn add_sums_coefficients_per_power(p in sorted_poly(), q in sorted_poly()) {
            let sum = p.add(&q).unwrap();

            for power in 0u32..32 {
                prop_assert_eq!(
                    coeff_at(&sum, power),
                    coeff_at(&p, power) + coeff_at(&q, power)
                );
            }
        }

        #[test]
        fn add_commutative(p in sorted_poly(), q in sorted_poly()) {
            // Term-sequence equality: same powers, coefficients, and order.
            prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
        }

        #[test]
        fn add_identity(p in sorted_poly()) {
            let empty = Polynomial::new();
            prop_assert_eq!(p.add(&empty).unwrap(), p.clone());
            prop_assert_eq!(empty.add(&p).unwrap(), p);
        }

        #[test]
        fn add_length_bounds(p in sorted_poly(), q in sorted_poly()) {
            let sum = p.add(&q).unwrap();
            prop_assert!(sum.len() <= p.len() + q.len());
            prop_assert!(sum.len() >= p.len().max(q.len()));
        }

        #[test]
        fn evaluate_is_linear(p in sorted_poly(), q in sorted_poly(), x in -3i64..=3) {
            let sum = p.add(&q).unwrap();
            prop_assume!(!sum.is_empty());

            let lhs = sum.evaluate(x).unwrap();
            let rhs = p.evaluate(x).unwrap_or(0) + q.evaluate(x).unwrap_or(0);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn evaluate_matches_naive_sum(p in sorted_poly(), x in -3i64..=3) {
            prop_assume!(!p.is_empty());

            let naive: i64 = p
                .terms()
                .iter()
                .map(|t| t.coeff * x.pow(t.power))
                .sum();
            prop_assert_eq!(p.evaluate(x).unwrap(), naive);
        }
    }
}
