//! Property-based tests for the dominance order.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{partitions_of, Ideal, Partition};

    // Three partitions of the same n, drawn from the full enumeration.
    fn same_size_triple() -> impl Strategy<Value = (u32, Partition, Partition, Partition)> {
        (1u32..=9).prop_flat_map(|n| {
            let all = partitions_of(n);
            let len = all.len();
            (0..len, 0..len, 0..len).prop_map(move |(i, j, k)| {
                (n, all[i].clone(), all[j].clone(), all[k].clone())
            })
        })
    }

    fn any_partition() -> impl Strategy<Value = Partition> {
        proptest::collection::vec(1u32..=6, 1..=6)
            .prop_map(|parts| Partition::from_parts(parts).unwrap())
    }

    proptest! {
        #[test]
        fn dominance_is_antisymmetric((_, p, q, _) in same_size_triple()) {
            prop_assert_eq!(p.dominates(&q) && q.dominates(&p), p == q);
        }

        #[test]
        fn dominance_is_transitive((_, p, q, r) in same_size_triple()) {
            if p.dominates(&q) && q.dominates(&r) {
                prop_assert!(p.dominates(&r));
            }
        }

        #[test]
        fn meet_is_greatest_lower_bound((n, p, q, _) in same_size_triple()) {
            let m = p.meet(&q);
            prop_assert_eq!(m.n(), n);
            prop_assert!(p.dominates(&m));
            prop_assert!(q.dominates(&m));
            for lower in partitions_of(n) {
                if p.dominates(&lower) && q.dominates(&lower) {
                    prop_assert!(m.dominates(&lower));
                }
            }
        }

        #[test]
        fn conjugation_reverses_dominance((_, p, q, _) in same_size_triple()) {
            prop_assert_eq!(p.dominates(&q), q.conjugate().dominates(&p.conjugate()));
        }

        #[test]
        fn covers_step_strictly_down(p in any_partition()) {
            for c in p.covered_partitions() {
                prop_assert_eq!(c.n(), p.n());
                prop_assert!(p.strictly_dominates(&c));
            }
        }

        #[test]
        fn box_moves_change_size_by_one(p in any_partition(), k in 0usize..8) {
            prop_assert_eq!(p.add_to_part(k).n(), p.n() + 1);
            prop_assert_eq!(p.remove_from_part(k).n(), p.n() - 1);
            prop_assert!(p.add_to_part(k).parts().windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(p.remove_from_part(k).parts().windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn ideal_generators_are_an_antichain(
            (n, p, q, r) in same_size_triple()
        ) {
            let ideal = Ideal::with_generators(n, [p.clone(), q.clone(), r.clone()]).unwrap();
            let gens = ideal.generators();
            for (i, a) in gens.iter().enumerate() {
                for b in &gens[i + 1..] {
                    prop_assert!(!a.is_comparable(b));
                }
            }
            for g in [&p, &q, &r] {
                prop_assert!(ideal.contains(g));
            }
            // Re-adding anything already inside changes nothing.
            let mut again = ideal.clone();
            prop_assert!(!again.add_generator(p.meet(&q)).unwrap());
            prop_assert_eq!(again.len(), ideal.len());
        }
    }
}
