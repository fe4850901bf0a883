//! Walk through the three test families on generated data
//!
//! Run with `RUST_LOG=debug` to see the backend statistics and the
//! contingency tables.

use hypotest_selector::{
    CategoricalOptions, CorrelationOptions, FrameTestExt, NormalityMethod, NormalityOptions,
    Tester,
};
use polars::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let normal = Normal::new(170.0, 8.0)?;
    let noise = Normal::new(0.0, 4.0)?;
    let exp = Exp::new(0.5)?;
    let heights: Vec<f64> = (0..200).map(|_| normal.sample(&mut rng)).collect();
    let weights: Vec<f64> = heights
        .iter()
        .map(|h| 0.9 * h - 80.0 + noise.sample(&mut rng))
        .collect();
    let waiting: Vec<f64> = (0..15).map(|_| exp.sample(&mut rng)).collect();

    let tester = Tester::new();
    let people = df![
        "height" => heights,
        "weight" => weights,
    ]?;

    println!("=== Normality ===\n");
    let result = people.normality_test(&tester, "height", NormalityOptions::default())?;
    println!("heights: {result}\n");
    let options = NormalityOptions::new().with_method(NormalityMethod::DAgostino);
    let result = tester.normality_test(&Series::new("waiting".into(), waiting), options)?;
    println!("waiting times (n = 15): {result}\n");

    println!("=== Categorical ===\n");
    let smokers: Vec<i64> = (0..200).map(|_| i64::from(rng.gen_bool(0.3))).collect();
    let cough: Vec<&str> = smokers
        .iter()
        .map(|&s| if rng.gen_bool(if s == 1 { 0.6 } else { 0.2 }) { "cough" } else { "none" })
        .collect();
    let result = tester.categorical_test(
        &Series::new("smoker".into(), smokers),
        &Series::new("cough".into(), cough),
        CategoricalOptions::default(),
    )?;
    println!("smoking vs cough: {result}\n");

    let treated = Series::new("treated".into(), &[1i64, 1, 1, 1, 0, 0, 0, 0, 1, 0]);
    let cured = Series::new("cured".into(), &[1i64, 1, 1, 0, 0, 0, 1, 0, 1, 0]);
    let result = tester.categorical_test(&treated, &cured, CategoricalOptions::default())?;
    println!("small trial: {result}\n");

    println!("=== Correlation ===\n");
    let result = people.correlation_test(&tester, "height", "weight", CorrelationOptions::default())?;
    println!("height vs weight: {result}\n");

    Ok(())
}
