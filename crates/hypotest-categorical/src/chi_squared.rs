//! Pearson's chi-squared test of independence

use crate::{convert_error, ContingencyTable, IndependenceTest};
use anofox_tests::chisq_test;
use hypotest_core::{Error, Result, TestStatistic};
use tracing::{debug, instrument};

/// Chi-squared test on a contingency table
///
/// With `correction` enabled (the default) and a single degree of freedom,
/// each observed count is moved towards its expected count by at most 0.5
/// (Yates' continuity correction).
#[derive(Debug, Clone, Copy)]
pub struct ChiSquaredIndependence {
    correction: bool,
}

impl Default for ChiSquaredIndependence {
    fn default() -> Self {
        Self { correction: true }
    }
}

impl ChiSquaredIndependence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable Yates' correction for 2x2 tables
    pub fn with_correction(mut self, correction: bool) -> Self {
        self.correction = correction;
        self
    }

    pub fn correction(&self) -> bool {
        self.correction
    }
}

impl IndependenceTest for ChiSquaredIndependence {
    fn name(&self) -> &'static str {
        "chi2"
    }

    #[instrument(skip(self, table), fields(shape = ?table.shape()))]
    fn test(&self, table: &ContingencyTable) -> Result<TestStatistic> {
        let dof = table.degrees_of_freedom();
        if dof == 0 {
            let (rows, cols) = table.shape();
            return Err(Error::InvalidInput(format!(
                "Chi-squared test needs at least a 2x2 table, got {rows}x{cols}"
            )));
        }

        let expected = table.expected();
        if expected.iter().flatten().any(|&e| e <= 0.0) {
            return Err(Error::Computation(
                "Chi-squared test needs every expected frequency to be positive".to_string(),
            ));
        }
        debug!("observed:\n{}", table);
        debug!("expected:\n{}", table.render_with(&expected));

        let counts: Vec<Vec<usize>> = table
            .counts()
            .iter()
            .map(|row| row.iter().map(|&n| n as usize).collect())
            .collect();
        let result = chisq_test(&counts, self.correction).map_err(convert_error)?;

        debug!(
            "chi2 = {:.6}, dof = {}, p = {:.6}, yates = {}",
            result.statistic,
            dof,
            result.p_value,
            self.correction && dof == 1
        );
        Ok(
            TestStatistic::new(result.statistic, result.p_value, table.total() as usize)
                .with_degrees_of_freedom(result.df as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_table() -> ContingencyTable {
        ContingencyTable::from_counts(vec![vec![2, 3], vec![4, 1]]).unwrap()
    }

    #[test]
    fn test_yates_corrected_2x2() {
        let result = ChiSquaredIndependence::new().test(&small_table()).unwrap();
        assert_abs_diff_eq!(result.statistic, 5.0 / 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 0.5186, epsilon = 1e-3);
        assert_eq!(result.degrees_of_freedom, Some(1.0));
        assert_eq!(result.sample_size, 10);
    }

    #[test]
    fn test_uncorrected_2x2() {
        let result = ChiSquaredIndependence::new()
            .with_correction(false)
            .test(&small_table())
            .unwrap();
        assert_abs_diff_eq!(result.statistic, 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correction_never_overshoots() {
        // |O - E| = 0.25 < 0.5, so the corrected statistic is exactly zero
        let table = ContingencyTable::from_counts(vec![vec![10, 10], vec![10, 11]]).unwrap();
        let result = ChiSquaredIndependence::new().test(&table).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_larger_table_is_uncorrected() {
        let table =
            ContingencyTable::from_counts(vec![vec![10, 20], vec![20, 10], vec![15, 15]]).unwrap();
        let result = ChiSquaredIndependence::new().test(&table).unwrap();
        // expected is 15 everywhere: (25 * 4) / 15
        assert_abs_diff_eq!(result.statistic, 100.0 / 15.0, epsilon = 1e-12);
        assert_eq!(result.degrees_of_freedom, Some(2.0));
        assert_abs_diff_eq!(result.p_value, (-result.statistic / 2.0).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_tables() {
        let one_row = ContingencyTable::from_counts(vec![vec![3, 4]]).unwrap();
        assert!(matches!(
            ChiSquaredIndependence::new().test(&one_row),
            Err(Error::InvalidInput(_))
        ));

        let empty_column = ContingencyTable::from_counts(vec![vec![3, 0], vec![4, 0]]).unwrap();
        assert!(matches!(
            ChiSquaredIndependence::new().test(&empty_column),
            Err(Error::Computation(_))
        ));
    }
}
