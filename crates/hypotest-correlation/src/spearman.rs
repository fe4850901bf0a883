//! Spearman rank correlation

use crate::pearson::{pearson_r, r_p_value};
use crate::CorrelationTest;
use hypotest_core::utils::average_ranks;
use hypotest_core::{Alternative, Result, TestStatistic};
use tracing::debug;

/// Spearman's rho: Pearson's r on average ranks, same t approximation
#[derive(Debug, Clone, Copy, Default)]
pub struct Spearman;

impl Spearman {
    pub fn new() -> Self {
        Self
    }
}

impl CorrelationTest for Spearman {
    fn name(&self) -> &'static str {
        "spearman"
    }

    fn correlate(&self, x: &[f64], y: &[f64], alternative: Alternative) -> Result<TestStatistic> {
        self.check_pair(x, y)?;
        let rho = pearson_r(&average_ranks(x), &average_ranks(y))?;
        let p_value = r_p_value(rho, x.len(), alternative)?;

        debug!("Spearman: n={}, rho={:.6}, p={:.6} ({})", x.len(), rho, p_value, alternative);
        Ok(TestStatistic::new(rho, p_value, x.len()).with_degrees_of_freedom((x.len() - 2) as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_monotone_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| v.exp()).collect();
        let result = Spearman.correlate(&x, &y, Alternative::TwoSided).unwrap();
        assert_abs_diff_eq!(result.statistic, 1.0, epsilon = 1e-12);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_ties_use_average_ranks() {
        // ranks: x = [1, 2.5, 2.5, 4], y = [1, 2, 3, 4]
        let x = [10.0, 20.0, 20.0, 30.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let result = Spearman.correlate(&x, &y, Alternative::TwoSided).unwrap();
        // sxy = 4.5, sxx = 4.5, syy = 5
        assert_abs_diff_eq!(result.statistic, 4.5 / (4.5f64 * 5.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_robust_to_outlier() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, -500.0];
        let rho = Spearman.correlate(&x, &y, Alternative::TwoSided).unwrap();
        let r = crate::Pearson.correlate(&x, &y, Alternative::TwoSided).unwrap();
        assert!(rho.statistic > r.statistic);
    }
}
