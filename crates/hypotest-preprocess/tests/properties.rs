//! Properties of the preparation steps on generated frames

use hypotest_core::sample;
use hypotest_preprocess::{Encoding, Normalizer, NormalizerConfig, Preprocessing};
use polars::prelude::*;
use proptest::prelude::*;

fn values(frame: &DataFrame, name: &str) -> Vec<f64> {
    sample::values(sample::column(frame, name).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn inverse_transform_restores_columns(
        rows in prop::collection::vec((-1e3f64..1e3, 0.0f64..50.0, 0.1f64..1e4), 2..40),
    ) {
        let frame = df![
            "z" => rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            "m" => rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            "l" => rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        ]
        .unwrap();
        let config = NormalizerConfig::new()
            .with_zscore(["z"])
            .with_min_max(["m"])
            .with_log10(["l"]);
        let mut normalizer = Normalizer::new(config);
        let scaled = normalizer.fit_transform(&frame).unwrap();
        let restored = normalizer.inverse_transform(&scaled).unwrap();

        for name in ["z", "m", "l"] {
            for (a, b) in values(&frame, name).iter().zip(values(&restored, name)) {
                prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{}: {} vs {}", name, a, b);
            }
        }
        for v in values(&scaled, "m") {
            prop_assert!((0.0..=1.0 + 1e-12).contains(&v));
        }
    }

    #[test]
    fn one_hot_marks_each_present_row_once(
        labels in prop::collection::vec(prop::option::of(prop::sample::select(vec!["a", "b", "c"])), 1..40),
    ) {
        let frame = df!["label" => labels.clone()].unwrap();
        let encoded = Preprocessing::new(None)
            .categ_encoding(&frame, false, Encoding::OneHot, None)
            .unwrap();

        let dummies: Vec<Vec<f64>> = encoded
            .get_column_names_str()
            .into_iter()
            .map(|name| values(&encoded, name))
            .collect();
        for (row, label) in labels.iter().enumerate() {
            let marked: f64 = dummies.iter().map(|column| column[row]).sum();
            prop_assert_eq!(marked, if label.is_some() { 1.0 } else { 0.0 });
        }
    }
}
