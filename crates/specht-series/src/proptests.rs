//! Property-based tests for the series engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::HilbertSeriesEngine;
    use specht_partitions::{partitions_of, Ideal, Partition};
    use specht_rings::Ring;

    fn partition_up_to(max: u32) -> impl Strategy<Value = Partition> {
        (2u32..=max).prop_flat_map(|n| {
            let all = partitions_of(n);
            (0..all.len()).prop_map(move |i| all[i].clone())
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn series_is_canonical(p in partition_up_to(8)) {
            let series = HilbertSeriesEngine::default().series(&p).unwrap();
            if series.exponent() > 0 {
                prop_assert!(!series.eval_numerator_at_one().is_zero());
            }
            if series.is_zero() {
                prop_assert_eq!(series.exponent(), 0);
            }
        }

        #[test]
        fn principal_ideal_has_generator_series(p in partition_up_to(8)) {
            let mut engine = HilbertSeriesEngine::default();
            let ideal = Ideal::with_generators(p.n(), [p.clone()]).unwrap();
            prop_assert_eq!(engine.ideal_series(&ideal).unwrap(), engine.series(&p).unwrap());
        }

        #[test]
        fn dominated_generator_does_not_change_series(p in partition_up_to(7), k in 0usize..4) {
            let mut engine = HilbertSeriesEngine::default();
            let mut below = p.clone();
            for _ in 0..k {
                if let Some(next) = below.covered_partitions().into_iter().next() {
                    below = next;
                }
            }
            let ideal = Ideal::with_generators(p.n(), [below, p.clone()]).unwrap();
            prop_assert_eq!(ideal.generators(), &[p.clone()]);
            prop_assert_eq!(engine.ideal_series(&ideal).unwrap(), engine.series(&p).unwrap());
        }
    }
}
