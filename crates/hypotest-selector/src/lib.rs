//! Hypothesis test selector
//!
//! [`Tester`] picks a suitable classical test for the data it is given and
//! reports the outcome as a [`TestResult`]:
//!
//! | operation | tests | alternative accepted when |
//! |-----------|-------|---------------------------|
//! | [`normality_test`](Tester::normality_test) | Shapiro-Wilk, D'Agostino K² | `p >= alpha` |
//! | [`categorical_test`](Tester::categorical_test) | chi-squared, Fisher's exact | `p < alpha` |
//! | [`correlation_test`](Tester::correlation_test) | Pearson, Spearman, Kendall tau-b | `p < alpha` |
//!
//! Conditions that weaken a result (small samples, sparse contingency
//! tables) do not fail the call. They are appended to the report, listed in
//! [`TestResult::warnings`] and emitted through `tracing`.
//!
//! Samples are polars [`Series`](polars::prelude::Series); [`FrameTestExt`]
//! addresses them by column name on a `DataFrame`.
//!
//! # Example
//!
//! ```rust
//! use hypotest_selector::{CorrelationOptions, TestKind, Tester};
//! use polars::prelude::*;
//!
//! let x = Series::new("treated".into(), &[0i64, 1, 0, 1, 1, 0, 1, 0, 1, 1]);
//! let y = Series::new("cured".into(), &[1i64, 1, 0, 1, 0, 0, 1, 0, 1, 1]);
//!
//! let result = Tester::new()
//!     .correlation_test(&x, &y, CorrelationOptions::default())
//!     .unwrap();
//! assert_eq!(result.test, TestKind::Pearson);
//! assert_eq!(result.result, result.p_value < 0.05);
//! ```

mod frame;
pub mod method;
pub mod options;
pub mod result;
mod tester;

pub use frame::FrameTestExt;
pub use method::{BinaryHint, CategoricalMethod, CorrelationMethod, NormalityMethod};
pub use options::{
    check_significance, CategoricalOptions, CorrelationOptions, NormalityOptions,
    DEFAULT_SIGNIFICANCE,
};
pub use result::{TestFamily, TestKind, TestResult, ValidityWarning};
pub use tester::{Tester, LOW_CELL_COUNT};
