//! Property-based tests for canonical rational expressions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::HilbExpr;
    use specht_poly::DensePoly;
    use specht_rings::Z;

    fn small_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec((-20i64..20i64).prop_map(Z::new), 1..=5)
            .prop_map(DensePoly::new)
    }

    fn expr() -> impl Strategy<Value = HilbExpr> {
        (small_poly(), 0usize..4).prop_map(|(h, a)| HilbExpr::new(h, a).unwrap())
    }

    fn is_canonical(x: &HilbExpr) -> bool {
        if x.is_zero() {
            return x.exponent() == 0;
        }
        x.exponent() == 0 || !specht_rings::Ring::is_zero(&x.eval_numerator_at_one())
    }

    proptest! {
        #[test]
        fn canonical_form_is_unique(h in small_poly(), a in 0usize..4, k in 0usize..4) {
            // h/(1-t)^a and h(1-t)^k/(1-t)^(a+k) are the same value.
            let direct = HilbExpr::new(h.clone(), a).unwrap();
            let padded = HilbExpr::new(h.mul(&DensePoly::one_minus_t_pow(k)), a + k).unwrap();
            prop_assert_eq!(direct.numerator(), padded.numerator());
            prop_assert_eq!(direct.exponent(), padded.exponent());
        }

        #[test]
        fn operations_return_canonical(x in expr(), y in expr()) {
            prop_assert!(is_canonical(&x.add(&y).unwrap()));
            prop_assert!(is_canonical(&x.sub(&y).unwrap()));
            prop_assert!(is_canonical(&x.mul(&y).unwrap()));
            prop_assert!(is_canonical(&-&x));
        }

        #[test]
        fn add_inverse_is_zero(x in expr()) {
            let z = x.add(&-&x).unwrap();
            prop_assert!(z.is_zero());
            prop_assert_eq!(z.exponent(), 0);
        }

        #[test]
        fn add_commutative(x in expr(), y in expr()) {
            prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
        }

        #[test]
        fn mul_distributes(x in expr(), y in expr(), z in expr()) {
            let left = x.mul(&y.add(&z).unwrap()).unwrap();
            let right = x.mul(&y).unwrap().add(&x.mul(&z).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }
    }
}
