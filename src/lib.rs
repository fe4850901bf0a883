//! Hypothesis testing toolkit
//!
//! Picks and runs classical hypothesis tests on sample data, and prepares
//! tabular data for them.
//!
//! ## Crates
//!
//! - [`core`](hypotest_core): error type, sample access on polars series
//! - [`normality`]: Shapiro-Wilk and D'Agostino K²
//! - [`categorical`]: contingency tables, chi-squared and Fisher's exact
//! - [`correlation`]: Pearson, Spearman and Kendall tau-b
//! - [`selector`]: the [`Tester`] that chooses between them, and
//!   [`FrameTestExt`] for named `DataFrame` columns
//! - [`preprocess`]: CSV loading, cleaning, encoding and normalization
//!
//! ## Example
//!
//! ```rust
//! use hypotest::prelude::*;
//!
//! let frame = df![
//!     "treated" => [1i64, 1, 1, 1, 0, 0, 0, 0, 1, 0],
//!     "cured" => [1i64, 1, 1, 0, 0, 0, 1, 0, 1, 0],
//! ]
//! .unwrap();
//!
//! let result = frame
//!     .categorical_test(&Tester::new(), "treated", "cured", CategoricalOptions::default())
//!     .unwrap();
//! assert_eq!(result.test, TestKind::FisherExact);
//! assert!(result.chi2.is_some());
//! println!("{}", result.report);
//! ```

pub use hypotest_categorical as categorical;
pub use hypotest_correlation as correlation;
pub use hypotest_normality as normality;
pub use hypotest_preprocess as preprocess;
pub use hypotest_selector as selector;

pub use hypotest_core::{Alternative, Error, Level, Result, TestStatistic};
pub use hypotest_preprocess::{
    DataSource, Encoding, Normalizer, NormalizerConfig, Preprocessing, Spreadsheet,
};
pub use hypotest_selector::{
    BinaryHint, CategoricalMethod, CategoricalOptions, CorrelationMethod, CorrelationOptions,
    FrameTestExt, NormalityMethod, NormalityOptions, TestKind, TestResult, Tester,
    ValidityWarning,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use hypotest_core::prelude::*;
    pub use polars::prelude::{df, DataFrame, Series};
    pub use hypotest_preprocess::{DataSource, Encoding, NormalizerConfig, Preprocessing, Spreadsheet};
    pub use hypotest_selector::{
        BinaryHint, CategoricalMethod, CategoricalOptions, CorrelationMethod, CorrelationOptions,
        FrameTestExt, NormalityMethod, NormalityOptions, TestKind, TestResult, Tester,
    };
}
