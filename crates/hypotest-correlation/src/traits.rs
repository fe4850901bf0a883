//! Trait implemented by every correlation test

use hypotest_core::utils::{check_finite, check_sample_size};
use hypotest_core::{Alternative, Error, Result, TestStatistic};

/// A test of the null hypothesis that two paired samples are uncorrelated
pub trait CorrelationTest {
    /// Name used in reports
    fn name(&self) -> &'static str;

    /// Smallest number of pairs the test can be computed for
    fn min_sample_size(&self) -> usize {
        3
    }

    /// Correlation coefficient and its p-value under `alternative`
    fn correlate(&self, x: &[f64], y: &[f64], alternative: Alternative) -> Result<TestStatistic>;

    /// Validate a pair of samples before computing anything
    fn check_pair(&self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "paired samples"));
        }
        check_finite(x, "first sample")?;
        check_finite(y, "second sample")?;
        check_sample_size(x, self.min_sample_size())
    }
}
