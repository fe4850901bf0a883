//! Property-based tests for sample reading and slice helpers

use hypotest_core::utils::{average_ranks, sorted};
use hypotest_core::sample;
use polars::prelude::*;
use proptest::prelude::*;

proptest! {
    // Ranks always sum to n(n + 1) / 2, ties or not
    #[test]
    fn ranks_sum_is_fixed(data in prop::collection::vec(-20i32..20, 1..60)) {
        let values: Vec<f64> = data.iter().map(|&v| f64::from(v)).collect();
        let n = values.len() as f64;
        let total: f64 = average_ranks(&values).iter().sum();
        prop_assert!((total - n * (n + 1.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn ranks_follow_order(data in prop::collection::vec(-1e6f64..1e6, 2..60)) {
        let ranks = average_ranks(&data);
        for i in 0..data.len() {
            for j in 0..data.len() {
                if data[i] < data[j] {
                    prop_assert!(ranks[i] < ranks[j]);
                }
            }
        }
    }

    #[test]
    fn sorted_is_a_sorted_permutation(data in prop::collection::vec(-1e6f64..1e6, 0..60)) {
        let out = sorted(&data);
        prop_assert_eq!(out.len(), data.len());
        prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn distinct_levels_are_sorted_and_unique(labels in prop::collection::vec(0i64..6, 1..40)) {
        let series = Series::new("label".into(), &labels);
        let levels = sample::distinct_levels(&series).unwrap();
        prop_assert!(levels.windows(2).all(|w| w[0] < w[1]));
        for label in labels {
            prop_assert!(levels.contains(&label.into()));
        }
    }

    // Integer, float and text encodings of the same labels agree on the
    // positions of missing values
    #[test]
    fn missing_positions_survive_every_dtype(
        labels in prop::collection::vec(prop::option::of(0i64..5), 1..40),
    ) {
        let ints = Series::new("i".into(), &labels);
        let floats: Vec<Option<f64>> = labels.iter().map(|v| v.map(|x| x as f64)).collect();
        let texts: Vec<Option<String>> = labels.iter().map(|v| v.map(|x| format!("v{x}"))).collect();

        let missing = |series: &Series| -> Vec<bool> {
            sample::levels(series).unwrap().iter().map(Option::is_none).collect()
        };
        let expected: Vec<bool> = labels.iter().map(Option::is_none).collect();
        prop_assert_eq!(missing(&ints), expected.clone());
        prop_assert_eq!(missing(&Series::new("f".into(), &floats)), expected.clone());
        prop_assert_eq!(missing(&Series::new("t".into(), &texts)), expected);
    }
}
