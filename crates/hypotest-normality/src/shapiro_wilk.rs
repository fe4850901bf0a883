//! Shapiro-Wilk W test
//!
//! Delegates to `anofox_tests::shapiro_wilk` (Royston's AS R94 algorithm,
//! valid for `3 <= n <= 5000`) after validating the sample.

use crate::{convert_error, NormalityTest};
use anofox_tests::shapiro_wilk;
use hypotest_core::utils::{check_finite, check_sample_size, sorted};
use hypotest_core::{Error, Result, TestStatistic};
use tracing::debug;

const MAX_SAMPLE_SIZE: usize = 5000;
const SMALL: f64 = 1e-19;

/// Shapiro-Wilk test for normality
///
/// W lies in (0, 1]; values close to 1 indicate normal-looking data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapiroWilk;

impl ShapiroWilk {
    pub fn new() -> Self {
        Self
    }
}

impl NormalityTest for ShapiroWilk {
    fn name(&self) -> &'static str {
        "shapiro-wilk"
    }

    fn min_sample_size(&self) -> usize {
        3
    }

    fn test(&self, sample: &[f64]) -> Result<TestStatistic> {
        check_finite(sample, "sample")?;
        check_sample_size(sample, self.min_sample_size())?;
        let n = sample.len();
        if n > MAX_SAMPLE_SIZE {
            return Err(Error::InvalidInput(format!(
                "Shapiro-Wilk is limited to n <= {MAX_SAMPLE_SIZE}, got {n}"
            )));
        }

        let x = sorted(sample);
        if x[n - 1] - x[0] < SMALL {
            return Err(Error::Computation(
                "Shapiro-Wilk needs a sample with non-zero range".to_string(),
            ));
        }

        let result = shapiro_wilk(&x).map_err(convert_error)?;
        let w = result.statistic.min(1.0);
        let p_value = result.p_value.clamp(0.0, 1.0);

        debug!("Shapiro-Wilk: n={}, W={:.6}, p={:.6}", n, w, p_value);
        Ok(TestStatistic::new(w, p_value, n))
    }
}
