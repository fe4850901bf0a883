//! Running the selector on named columns of a polars [`DataFrame`]

use crate::options::{CategoricalOptions, CorrelationOptions, NormalityOptions};
use crate::result::TestResult;
use crate::tester::Tester;
use hypotest_core::{sample, Result};
use polars::prelude::DataFrame;
use tracing::debug;

/// Hypothesis tests addressed by column name
///
/// Unknown names fail with
/// [`Error::InvalidColumn`](hypotest_core::Error::InvalidColumn); everything
/// else behaves like the corresponding [`Tester`] method.
pub trait FrameTestExt {
    fn normality_test(
        &self,
        tester: &Tester,
        column: &str,
        options: NormalityOptions,
    ) -> Result<TestResult>;

    fn categorical_test(
        &self,
        tester: &Tester,
        column1: &str,
        column2: &str,
        options: CategoricalOptions,
    ) -> Result<TestResult>;

    fn correlation_test(
        &self,
        tester: &Tester,
        column1: &str,
        column2: &str,
        options: CorrelationOptions,
    ) -> Result<TestResult>;
}

impl FrameTestExt for DataFrame {
    fn normality_test(
        &self,
        tester: &Tester,
        column: &str,
        options: NormalityOptions,
    ) -> Result<TestResult> {
        debug!("normality test on `{}`", column);
        tester.normality_test(sample::column(self, column)?, options)
    }

    fn categorical_test(
        &self,
        tester: &Tester,
        column1: &str,
        column2: &str,
        options: CategoricalOptions,
    ) -> Result<TestResult> {
        debug!("categorical test on `{}` x `{}`", column1, column2);
        tester.categorical_test(
            sample::column(self, column1)?,
            sample::column(self, column2)?,
            options,
        )
    }

    fn correlation_test(
        &self,
        tester: &Tester,
        column1: &str,
        column2: &str,
        options: CorrelationOptions,
    ) -> Result<TestResult> {
        debug!("correlation test on `{}` x `{}`", column1, column2);
        tester.correlation_test(
            sample::column(self, column1)?,
            sample::column(self, column2)?,
            options,
        )
    }
}
