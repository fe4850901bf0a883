//! Load the passenger table, clean it and run the three test families
//!
//! ```text
//! RUST_LOG=info cargo run -p hypotest-preprocess --example passenger_walkthrough
//! ```

use hypotest_preprocess::{DataSource, Preprocessing, Spreadsheet};
use hypotest_selector::{
    CategoricalOptions, CorrelationOptions, FrameTestExt, NormalityOptions, Tester,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/passengers.csv"));

    println!("=== The data ===\n");
    let frame = Spreadsheet::new().get_data(&path, Some(&["Survived", "Pclass", "Sex", "Age", "Fare"]))?;
    println!("{}", frame.head(Some(5)));

    let mut pipeline = Preprocessing::new(None);
    let frame = pipeline.clean_data(&frame, true)?;
    println!("{} complete rows\n", frame.height());

    let tester = Tester::new();

    println!("=== Normality test ===\n");
    let result = frame.normality_test(&tester, "Age", NormalityOptions::default())?;
    println!("{result}");
    println!("p-value = {}, significance = {}\n", result.p_value, result.significance);

    println!("=== Categorical tests ===\n");
    for column in ["Sex", "Pclass"] {
        let result =
            frame.categorical_test(&tester, column, "Survived", CategoricalOptions::default())?;
        println!("{column} vs Survived: {result}\n");
    }

    println!("=== Correlation test ===\n");
    let result = frame.correlation_test(&tester, "Age", "Fare", CorrelationOptions::default())?;
    println!("Age vs Fare: {result}");

    Ok(())
}
