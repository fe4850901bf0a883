//! D'Agostino-Pearson K² omnibus test
//!
//! Combines a skewness z-score (D'Agostino 1970) and a kurtosis z-score
//! (Anscombe & Glynn 1983) into `K² = Zs² + Zk²`, which is chi-squared with
//! two degrees of freedom under normality. The computation is delegated to
//! `anofox_tests::dagostino_k_squared`.

use crate::{convert_error, NormalityTest};
use anofox_tests::dagostino_k_squared;
use hypotest_core::utils::{central_moment, check_finite, check_sample_size};
use hypotest_core::{Error, Result, TestStatistic};
use tracing::debug;

/// Sample size below which the kurtosis approximation is unreliable
pub const DAGOSTINO_RELIABLE_N: usize = 20;

/// D'Agostino-Pearson K² test for normality
#[derive(Debug, Clone, Copy, Default)]
pub struct DAgostinoPearson;

/// K² and its p-value together with the two components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DAgostinoComponents {
    pub z_skewness: f64,
    pub z_kurtosis: f64,
    pub k_squared: f64,
    pub p_value: f64,
}

impl DAgostinoPearson {
    pub fn new() -> Self {
        Self
    }

    /// Skewness and kurtosis z-scores for `sample`
    pub fn components(&self, sample: &[f64]) -> Result<DAgostinoComponents> {
        check_finite(sample, "sample")?;
        check_sample_size(sample, self.min_sample_size())?;

        let m2 = central_moment(sample, 2);
        if m2 <= 0.0 {
            return Err(Error::Computation(
                "D'Agostino K-squared needs a sample with non-zero variance".to_string(),
            ));
        }

        let result = dagostino_k_squared(sample).map_err(convert_error)?;
        if !result.z_skewness.is_finite() || !result.z_kurtosis.is_finite() {
            return Err(Error::Computation(format!(
                "D'Agostino K-squared produced non-finite z-scores (Zs={}, Zk={})",
                result.z_skewness, result.z_kurtosis
            )));
        }

        Ok(DAgostinoComponents {
            z_skewness: result.z_skewness,
            z_kurtosis: result.z_kurtosis,
            k_squared: result.statistic,
            p_value: result.p_value,
        })
    }
}

impl NormalityTest for DAgostinoPearson {
    fn name(&self) -> &'static str {
        "dagostinos"
    }

    /// The skewness transform is only defined from eight observations on
    fn min_sample_size(&self) -> usize {
        8
    }

    fn reliable_sample_size(&self) -> usize {
        DAGOSTINO_RELIABLE_N
    }

    fn test(&self, sample: &[f64]) -> Result<TestStatistic> {
        let parts = self.components(sample)?;
        let p_value = parts.p_value.clamp(0.0, 1.0);

        debug!(
            "D'Agostino K2: n={}, Zs={:.4}, Zk={:.4}, K2={:.4}, p={:.6}",
            sample.len(),
            parts.z_skewness,
            parts.z_kurtosis,
            parts.k_squared,
            p_value
        );
        Ok(TestStatistic::new(parts.k_squared, p_value, sample.len()).with_degrees_of_freedom(2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mirrored_sample_keeps_k_squared() {
        // mirroring a symmetric sample leaves both moments unchanged
        let data: Vec<f64> = (1..=30).map(f64::from).collect();
        let parts = DAgostinoPearson.components(&data).unwrap();
        let mirrored: Vec<f64> = data.iter().map(|v| -v).collect();
        let mirrored_parts = DAgostinoPearson.components(&mirrored).unwrap();
        assert_abs_diff_eq!(parts.z_kurtosis, mirrored_parts.z_kurtosis, epsilon = 1e-9);
        assert_abs_diff_eq!(parts.k_squared, mirrored_parts.k_squared, epsilon = 1e-9);
    }

    #[test]
    fn test_k_squared_combines_components() {
        let data = [
            -0.5, 0.1, -0.3, 0.8, 0.2, -0.1, 0.4, -0.2, 0.3, 0.0, -0.4, 0.5, 0.1, -0.6, 0.2, -0.1,
            0.3, -0.3, 0.4, 0.0,
        ];
        let parts = DAgostinoPearson.components(&data).unwrap();
        let combined = parts.z_skewness.powi(2) + parts.z_kurtosis.powi(2);
        assert_abs_diff_eq!(parts.k_squared, combined, epsilon = 1e-9);
        // chi-squared(2) survival function
        assert_abs_diff_eq!(parts.p_value, (-parts.k_squared / 2.0).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_right_skew_gives_positive_skewness_z() {
        let data = [1.0, 1.2, 1.1, 1.3, 1.0, 1.4, 1.2, 9.0, 1.1, 1.3, 1.2, 12.0];
        let parts = DAgostinoPearson.components(&data).unwrap();
        assert!(parts.z_skewness > 2.0);
        let result = DAgostinoPearson.test(&data).unwrap();
        assert!(result.p_value < 0.05);
        assert_eq!(result.degrees_of_freedom, Some(2.0));
    }

    #[test]
    fn test_requires_eight_observations() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert!(matches!(
            DAgostinoPearson.test(&data),
            Err(Error::InsufficientData { expected: 8, actual: 7 })
        ));
    }

    #[test]
    fn test_constant_sample_fails() {
        assert!(DAgostinoPearson.test(&[2.0; 10]).is_err());
    }
}
