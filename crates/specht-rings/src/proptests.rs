//! Property-based tests for the integer ring.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Ring, Z};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn z_add_commutative(a in small_int(), b in small_int()) {
            let (a, b) = (Z::new(a), Z::new(b));
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn z_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn z_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn z_additive_inverse(a in small_int()) {
            let a = Z::new(a);
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn z_matches_machine_arithmetic(a in small_int(), b in small_int()) {
            prop_assert_eq!((Z::new(a) * Z::new(b)).to_i64(), Some(a * b));
            prop_assert_eq!((Z::new(a) - Z::new(b)).to_i64(), Some(a - b));
        }
    }
}
