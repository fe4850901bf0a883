//! The hypothesis test selector

use crate::method::{BinaryHint, CategoricalMethod, CorrelationMethod, NormalityMethod};
use crate::options::{
    check_significance, CategoricalOptions, CorrelationOptions, NormalityOptions,
};
use crate::result::{TestKind, TestResult, ValidityWarning};
use hypotest_categorical::{
    ChiSquaredIndependence, ContingencyTable, FisherExact, IndependenceTest,
};
use hypotest_core::{sample, Alternative, Error, Result};
use hypotest_correlation::{CorrelationTest, KendallTau, Pearson, Spearman};
use hypotest_normality::{DAgostinoPearson, NormalityTest, ShapiroWilk};
use polars::prelude::Series;
use tracing::{debug, instrument};

/// Cell count at or below which the chi-squared approximation is doubtful
pub const LOW_CELL_COUNT: u64 = 5;

/// Chooses a suitable hypothesis test for the data and runs it
///
/// The only state is the normality check used when `correlation_test` has
/// to decide between Pearson and Spearman (Shapiro-Wilk at 0.05 unless
/// configured otherwise).
#[derive(Debug, Clone, Copy, Default)]
pub struct Tester {
    normality_check: NormalityOptions,
}

impl Tester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normality test used to pick the correlation test
    pub fn with_normality_check(mut self, options: NormalityOptions) -> Self {
        self.normality_check = options;
        self
    }

    pub fn normality_check(&self) -> NormalityOptions {
        self.normality_check
    }

    /// Test the null hypothesis that `sample` was drawn from a normal
    /// distribution
    ///
    /// `result` is true when the p-value is at least the significance level,
    /// i.e. when the data looks normal.
    #[instrument(skip(self, sample), fields(n = sample.len(), method = %options.method))]
    pub fn normality_test(&self, sample: &Series, options: NormalityOptions) -> Result<TestResult> {
        check_significance(options.significance)?;
        let data = sample::values(sample)?;

        let (kind, backend): (TestKind, &dyn NormalityTest) = match options.method {
            NormalityMethod::ShapiroWilk => (TestKind::ShapiroWilk, &ShapiroWilk as &dyn NormalityTest),
            NormalityMethod::DAgostino => (TestKind::DAgostino, &DAgostinoPearson as &dyn NormalityTest),
        };
        let outcome = backend.test(&data)?;

        let mut result = TestResult::new(kind, outcome, options.significance);
        if data.len() < backend.reliable_sample_size() {
            result = result.with_warning(ValidityWarning::SmallSample {
                test: kind,
                n: data.len(),
                recommended: backend.reliable_sample_size(),
            });
        }
        Ok(result)
    }

    /// Test the null hypothesis that two categorical samples are independent
    ///
    /// With [`CategoricalMethod::Default`] the chi-squared test is used
    /// unless some cell count is at most [`LOW_CELL_COUNT`]. In that case a
    /// 2x2 table gets Fisher's exact test as the primary result with the
    /// chi-squared result attached as `chi2`; larger tables still get
    /// chi-squared, flagged as doubtful.
    #[instrument(skip(self, sample1, sample2), fields(n = sample1.len(), method = %options.method))]
    pub fn categorical_test(
        &self,
        sample1: &Series,
        sample2: &Series,
        options: CategoricalOptions,
    ) -> Result<TestResult> {
        check_significance(options.significance)?;
        let alpha = options.significance;
        let table = ContingencyTable::from_series(sample1, sample2)?;
        debug!("contingency table {:?}:\n{}", table.shape(), table);

        match options.method {
            CategoricalMethod::ChiSquared => chi_squared(&table, alpha),
            CategoricalMethod::FisherExact => fisher_exact(&table, alpha),
            CategoricalMethod::Default => {
                if !table.any_cell_at_most(LOW_CELL_COUNT) {
                    return chi_squared(&table, alpha);
                }

                let low_count = ValidityWarning::LowCellCount {
                    threshold: LOW_CELL_COUNT,
                };
                if table.is_2x2() {
                    let chi2 = chi_squared(&table, alpha)?;
                    Ok(fisher_exact(&table, alpha)?
                        .with_warning(low_count)
                        .with_note("Fisher's exact test was applied instead; the chi-squared result is attached as `chi2` for comparison.")
                        .with_chi2(chi2))
                } else {
                    let (rows, cols) = table.shape();
                    Ok(chi_squared(&table, alpha)?
                        .with_warning(low_count)
                        .with_warning(ValidityWarning::FisherNotApplicable { rows, cols }))
                }
            }
        }
    }

    /// Test the null hypothesis that two numeric samples are uncorrelated
    ///
    /// Without an explicit method, 0/1 samples get Pearson's point-biserial
    /// correlation; otherwise both samples go through the normality check
    /// and Pearson is used when both look normal, Spearman when not.
    #[instrument(skip(self, sample1, sample2), fields(n = sample1.len(), alternative = %options.alternative))]
    pub fn correlation_test(
        &self,
        sample1: &Series,
        sample2: &Series,
        options: CorrelationOptions,
    ) -> Result<TestResult> {
        check_significance(options.significance)?;
        if sample1.len() != sample2.len() {
            return Err(Error::size_mismatch(
                sample1.len(),
                sample2.len(),
                "correlation samples",
            ));
        }
        let x = sample::values(sample1)?;
        let y = sample::values(sample2)?;
        let (alpha, alternative) = (options.significance, options.alternative);

        if let Some(method) = options.method {
            return correlate(method, &x, &y, alpha, alternative);
        }

        let binary = match options.binary {
            BinaryHint::Yes => true,
            BinaryHint::No => false,
            BinaryHint::Auto => sample::is_binary(sample1) && sample::is_binary(sample2),
        };
        if binary {
            return Ok(correlate(CorrelationMethod::Pearson, &x, &y, alpha, alternative)?
                .with_preamble(
                    "Samples are binary, Pearson correlation is going to be applied (Point-biserial). ",
                ));
        }

        let normal1 = self.normality_test(sample1, self.normality_check)?.result;
        let normal2 = self.normality_test(sample2, self.normality_check)?.result;
        debug!("normality check: sample1 = {}, sample2 = {}", normal1, normal2);
        if normal1 && normal2 {
            Ok(correlate(CorrelationMethod::Pearson, &x, &y, alpha, alternative)?
                .with_preamble("Samples have normal distribution. "))
        } else {
            Ok(correlate(CorrelationMethod::Spearman, &x, &y, alpha, alternative)?
                .with_preamble("Samples do not have normal distribution. "))
        }
    }
}

fn chi_squared(table: &ContingencyTable, alpha: f64) -> Result<TestResult> {
    let outcome = ChiSquaredIndependence::new().test(table)?;
    Ok(TestResult::new(TestKind::ChiSquared, outcome, alpha))
}

fn fisher_exact(table: &ContingencyTable, alpha: f64) -> Result<TestResult> {
    let outcome = FisherExact.test(table)?;
    Ok(TestResult::new(TestKind::FisherExact, outcome, alpha))
}

fn correlate(
    method: CorrelationMethod,
    x: &[f64],
    y: &[f64],
    alpha: f64,
    alternative: Alternative,
) -> Result<TestResult> {
    let (kind, backend): (TestKind, &dyn CorrelationTest) = match method {
        CorrelationMethod::Pearson => (TestKind::Pearson, &Pearson as &dyn CorrelationTest),
        CorrelationMethod::Spearman => (TestKind::Spearman, &Spearman as &dyn CorrelationTest),
        CorrelationMethod::KendallTau => (TestKind::KendallTau, &KendallTau as &dyn CorrelationTest),
    };
    let outcome = backend.correlate(x, y, alternative)?;
    Ok(TestResult::new(kind, outcome, alpha))
}
