//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use specht_rings::{Ring, Z};

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Z> {
        (-100i64..100i64).prop_map(Z::new)
    }

    // Strategy for generating small polynomials (degree 0-5)
    fn small_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec(small_coeff(), 1..=6).prop_map(DensePoly::new)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn division_by_one_minus_t_reconstructs(a in small_poly()) {
            // a = (1 - t) q + r
            let (q, r) = a.div_one_minus_t();
            let back = DensePoly::one_minus_t().mul(&q).add(&DensePoly::constant(r));
            prop_assert_eq!(back, a);
        }

        #[test]
        fn multiple_of_one_minus_t_divides_exactly(a in small_poly()) {
            let product = a.mul(&DensePoly::one_minus_t());
            prop_assert_eq!(product.exact_div_one_minus_t().unwrap(), a);
        }

        #[test]
        fn remainder_is_value_at_one(a in small_poly()) {
            let (_, r) = a.div_one_minus_t();
            prop_assert_eq!(r, a.eval(&Z::one()));
        }

        #[test]
        fn shift_is_monomial_product(a in small_poly(), k in 0usize..6) {
            prop_assert_eq!(a.shift(k), a.mul(&DensePoly::monomial(Z::one(), k)));
        }
    }
}
