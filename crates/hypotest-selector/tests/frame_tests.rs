//! Tests addressed by column name on a polars `DataFrame`

use hypotest_core::Error;
use hypotest_selector::{
    CategoricalMethod, CategoricalOptions, CorrelationOptions, FrameTestExt, NormalityOptions,
    TestKind, Tester,
};
use polars::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::path::PathBuf;

fn passengers() -> DataFrame {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../hypotest-preprocess/tests/fixtures/passengers.csv");
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path))
        .unwrap()
        .finish()
        .unwrap()
        .select(["Survived", "Pclass", "Sex", "Age", "Fare"])
        .unwrap()
        .drop_nulls::<String>(None)
        .unwrap()
}

#[test]
fn tests_run_on_named_columns() {
    let frame = passengers();
    let tester = Tester::new();

    let result = frame
        .categorical_test(&tester, "Sex", "Survived", CategoricalOptions::default())
        .unwrap();
    assert_eq!(result.test, TestKind::FisherExact);
    assert_eq!(result.chi2.as_ref().map(|c| c.test), Some(TestKind::ChiSquared));

    let result = frame
        .normality_test(&tester, "Fare", NormalityOptions::default())
        .unwrap();
    assert_eq!(result.result, result.p_value >= result.significance);

    let result = frame
        .correlation_test(&tester, "Pclass", "Fare", CorrelationOptions::default())
        .unwrap();
    // first class fares are several times third class ones
    assert!(result.statistic < 0.0);
    assert!(result.result);
}

#[test]
fn unknown_columns_are_reported() {
    let frame = passengers();
    let tester = Tester::new();
    assert!(matches!(
        frame.normality_test(&tester, "Height", NormalityOptions::default()),
        Err(Error::InvalidColumn(name)) if name == "Height"
    ));
    assert!(matches!(
        frame.categorical_test(&tester, "Sex", "Cabin", CategoricalOptions::default()),
        Err(Error::InvalidColumn(_))
    ));
}

#[test]
fn method_names_parse_from_text() {
    let frame = passengers();
    let options = CategoricalOptions::new().with_method("chi2".parse().unwrap());
    let result = frame
        .categorical_test(&Tester::new(), "Sex", "Survived", options)
        .unwrap();
    assert_eq!(result.test, TestKind::ChiSquared);
    assert!(result.chi2.is_none());

    let err = "anova".parse::<CategoricalMethod>().unwrap_err();
    assert!(err.to_string().contains("chi2"));
}

#[test]
fn configured_normality_check_drives_correlation_choice() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let x: Vec<f64> = (0..40).map(|_| normal.sample(&mut rng)).collect();
    let y: Vec<f64> = x.iter().map(|v| v + normal.sample(&mut rng)).collect();
    let frame = df!["x" => x, "y" => y].unwrap();

    // a significance this close to one makes any sample look non-normal
    let strict = Tester::new()
        .with_normality_check(NormalityOptions::new().with_significance(0.999_999));
    let result = frame
        .correlation_test(&strict, "x", "y", CorrelationOptions::default())
        .unwrap();
    assert_eq!(result.test, TestKind::Spearman);
}
