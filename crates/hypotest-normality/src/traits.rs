//! Trait implemented by every normality test

use hypotest_core::{Result, TestStatistic};

/// A test of the null hypothesis that a sample was drawn from a normal
/// distribution
pub trait NormalityTest {
    /// Name used in reports
    fn name(&self) -> &'static str;

    /// Smallest sample the test can be computed for
    fn min_sample_size(&self) -> usize;

    /// Sample size below which the result should be read with care
    ///
    /// Defaults to [`min_sample_size`](Self::min_sample_size), meaning any
    /// computable sample is considered reliable.
    fn reliable_sample_size(&self) -> usize {
        self.min_sample_size()
    }

    /// Compute the statistic and p-value
    fn test(&self, sample: &[f64]) -> Result<TestStatistic>;
}
