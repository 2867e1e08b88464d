use proptest::prelude::*;
use seqinfo::{Options, Summarize as _, summarize};

fn options() -> impl Strategy<Value = Options> {
    (0..4_u8).prop_map(Options::from_bits_truncate)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn summary_is_reproducible(values in prop::collection::vec(any::<i64>(), 0..64), options in options()) {
        prop_assert_eq!(values.summary(options), values.summary(options));
    }

    #[test]
    fn small_integers_agree_with_naive_computation(values in prop::collection::vec(-1000_i32..1000, 1..64)) {
        let s = values.summary(Options::HISTOGRAM);
        let sum: i64 = values.iter().copied().map(i64::from).sum();
        let min = values.iter().copied().min();
        let max = values.iter().copied().max();

        prop_assert!(s.issues().is_empty());
        prop_assert_eq!(s.count(), values.len());
        prop_assert_eq!(s.exact_sum(), Some(sum));
        prop_assert_eq!(s.sum(), Some(sum as f64));
        prop_assert_eq!(s.min_value(), min);
        prop_assert_eq!(s.max_value(), max);
        prop_assert_eq!(s.min_value_index(), values.iter().position(|&x| Some(x) == min));
        prop_assert_eq!(s.max_value_index(), values.iter().position(|&x| Some(x) == max));
        prop_assert_eq!(s.all_elements_equal(), min == max);
        prop_assert_eq!(s.is_ascending(), values.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(s.is_strictly_ascending(), values.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(s.is_descending(), values.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(s.is_strictly_descending(), values.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(s.histogram().map(|h| h.total()), Some(values.len()));

        let deltas: Vec<u64> = values.windows(2).map(|w| u64::from(w[0].abs_diff(w[1]))).collect();
        prop_assert_eq!(s.exact_min_delta(), deltas.iter().copied().min());
        prop_assert_eq!(s.exact_max_delta(), deltas.iter().copied().max());

        if deltas.is_empty() {
            prop_assert_eq!(s.exact_sum_delta(), None);
        } else {
            prop_assert_eq!(s.exact_sum_delta(), Some(deltas.iter().sum()));
        }
    }

    #[test]
    fn exact_sum_matches_wide_sum(values in prop::collection::vec(any::<i64>(), 1..16)) {
        let s = values.summary(Options::empty());
        let wide: i128 = values.iter().copied().map(i128::from).sum();

        // Overflow is sticky, even if later elements bring the sum back in range
        let overflow = values
            .iter()
            .try_fold(0_i64, |sum, &x| sum.checked_add(x))
            .is_none();

        prop_assert_eq!(s.exact_sum_overflow(), overflow);
        if overflow {
            prop_assert_eq!(s.exact_sum(), None);
        } else {
            prop_assert_eq!(s.exact_sum().map(i128::from), Some(wide));
        }
        prop_assert!(!s.element_overflow());
    }

    #[test]
    fn overflow_flags_clear_their_fields(values in prop::collection::vec(any::<i64>(), 0..16)) {
        let s = summarize(&values, Options::empty());

        if s.exact_sum_delta_overflow() {
            prop_assert_eq!(s.exact_sum_delta(), None);
        }
        if s.exact_min_max_delta_overflow() {
            prop_assert_eq!(s.exact_min_delta(), None);
            prop_assert_eq!(s.exact_max_delta(), None);
            prop_assert_eq!(s.exact_sum_delta(), None);
        }
        if s.has_constant_exact_delta() {
            prop_assert!(s.constant_exact_delta().is_some());
            prop_assert_eq!(s.exact_min_delta(), s.exact_max_delta());
        }
    }

    #[test]
    fn median_only_for_sorted(mut values in prop::collection::vec(-1000_i32..1000, 1..32)) {
        prop_assert_eq!(
            values.summary(Options::empty()).median().is_some(),
            values.summary(Options::empty()).is_sorted(),
        );

        values.sort_unstable();
        let mid = values.len() / 2;
        let expected = if values.len() % 2 == 1 {
            f64::from(values[mid])
        } else {
            (f64::from(values[mid - 1]) + f64::from(values[mid])) / 2.0
        };
        prop_assert_eq!(values.summary(Options::empty()).median(), Some(expected));
    }

    #[test]
    fn range_reports_original_positions(
        values in prop::collection::vec(any::<i16>(), 1..32),
        start in 0_usize..32,
    ) {
        let start = start % values.len();
        let s = values.summary_of(start.., Options::empty()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let t = values[start..].summary(Options::empty());

        prop_assert_eq!(s.count(), t.count());
        prop_assert_eq!(s.exact_sum(), t.exact_sum());
        prop_assert_eq!(s.min_value_index(), t.min_value_index().map(|i| i + start));
        prop_assert_eq!(s.max_value_index(), t.max_value_index().map(|i| i + start));
    }
}

#[cfg(feature = "serde")]
proptest! {
    #[test]
    fn serde_round_trip(values in prop::collection::vec(any::<i32>(), 0..32), options in options()) {
        let s = values.summary(options);
        let json = serde_json::to_string(&s).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back: seqinfo::Summary<i32> = serde_json::from_str(&json).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, s);
    }

    #[test]
    fn serde_round_trip_of_floats(
        values in prop::collection::vec(prop_oneof![
            8 => -1e300..1e300_f64,
            1 => Just(f64::MAX),
            1 => Just(f64::INFINITY),
        ], 0..32),
        options in options(),
    ) {
        let s = values.summary(options);
        let json = serde_json::to_string(&s).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back: seqinfo::Summary<f64> = serde_json::from_str(&json).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, s);
    }
}
