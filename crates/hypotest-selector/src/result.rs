//! Structured outcome of a selected test

use hypotest_core::TestStatistic;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Test that produced a [`TestResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TestKind {
    ShapiroWilk,
    DAgostino,
    ChiSquared,
    FisherExact,
    Pearson,
    Spearman,
    KendallTau,
}

/// Family of a test, which fixes how its p-value is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestFamily {
    /// Alternative accepted when `p >= alpha` (the sample looks normal)
    Normality,
    /// Alternative accepted when `p < alpha` (the samples are dependent)
    Categorical,
    /// Alternative accepted when `p < alpha` (the samples are correlated)
    Correlation,
}

impl TestFamily {
    /// Value of [`TestResult::result`] for a p-value at level `significance`
    pub fn decide(&self, p_value: f64, significance: f64) -> bool {
        match self {
            Self::Normality => p_value >= significance,
            Self::Categorical | Self::Correlation => p_value < significance,
        }
    }

    fn conclusion(&self, result: bool) -> &'static str {
        match (self, result) {
            (Self::Normality, true) => {
                "The null hypothesis is accepted, thus the data was drawn from a normal distribution. "
            }
            (Self::Normality, false) => {
                "The alternative hypothesis is accepted, thus the data was not drawn from a normal distribution. "
            }
            (Self::Categorical, true) => {
                "The null hypothesis is rejected, thus there is evidence of dependency between the samples. "
            }
            (Self::Categorical, false) => {
                "The null hypothesis is not rejected, thus there is no evidence of dependency between the samples. "
            }
            (Self::Correlation, true) => {
                "The alternative hypothesis is accepted, thus there is correlation between the samples. "
            }
            (Self::Correlation, false) => {
                "The null hypothesis is accepted, thus there is no correlation between the samples. "
            }
        }
    }
}

impl TestKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShapiroWilk => "shapiro-wilk",
            Self::DAgostino => "dagostinos",
            Self::ChiSquared => "chi2",
            Self::FisherExact => "fisher_exact",
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
            Self::KendallTau => "kendalltau",
        }
    }

    pub fn family(&self) -> TestFamily {
        match self {
            Self::ShapiroWilk | Self::DAgostino => TestFamily::Normality,
            Self::ChiSquared | Self::FisherExact => TestFamily::Categorical,
            Self::Pearson | Self::Spearman | Self::KendallTau => TestFamily::Correlation,
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-fatal condition that weakens a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidityWarning {
    /// The test is computable but unreliable at this sample size
    SmallSample {
        test: TestKind,
        n: usize,
        recommended: usize,
    },
    /// Some contingency cell holds `threshold` or fewer observations
    LowCellCount { threshold: u64 },
    /// Fisher's exact test was wanted but the table is not 2x2
    FisherNotApplicable { rows: usize, cols: usize },
}

impl fmt::Display for ValidityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmallSample { test, n, recommended } => write!(
                f,
                "{test} is not reliable for samples smaller than {recommended} (n = {n}), the result may be invalid."
            ),
            Self::LowCellCount { threshold } => write!(
                f,
                "Some contingency table cell count is {threshold} or less, the chi-squared assumption is violated."
            ),
            Self::FisherNotApplicable { rows, cols } => write!(
                f,
                "Contingency table is {rows}x{cols}, not 2x2, so Fisher's exact test cannot be used; chi-squared was applied anyway and may be invalid."
            ),
        }
    }
}

/// Outcome of a test picked by the [`Tester`](crate::Tester)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    /// W, K², χ², odds ratio, r, ρ or τ depending on `test`
    pub statistic: f64,
    pub p_value: f64,
    /// Significance level the decision was taken at
    pub significance: f64,
    pub test: TestKind,
    /// Whether the alternative hypothesis of the family is accepted
    pub result: bool,
    /// Human readable summary, warnings included
    pub report: String,
    /// Chi-squared result attached to a Fisher's exact primary result
    pub chi2: Option<Box<TestResult>>,
    pub sample_size: usize,
    pub degrees_of_freedom: Option<f64>,
    pub warnings: Vec<ValidityWarning>,
}

impl TestResult {
    pub(crate) fn new(test: TestKind, outcome: TestStatistic, significance: f64) -> Self {
        let family = test.family();
        let result = family.decide(outcome.p_value, significance);
        let report = format!(
            "{}Significance level considered = {}, test applied = {}, p-value = {}, test statistic = {}.",
            family.conclusion(result),
            significance,
            test,
            outcome.p_value,
            outcome.statistic
        );
        Self {
            statistic: outcome.statistic,
            p_value: outcome.p_value,
            significance,
            test,
            result,
            report,
            chi2: None,
            sample_size: outcome.sample_size,
            degrees_of_freedom: outcome.degrees_of_freedom,
            warnings: Vec::new(),
        }
    }

    /// Put `text` in front of the report
    pub(crate) fn with_preamble(mut self, text: &str) -> Self {
        self.report.insert_str(0, text);
        self
    }

    /// Append `text` to the report
    pub(crate) fn with_note(mut self, text: &str) -> Self {
        self.report.push(' ');
        self.report.push_str(text);
        self
    }

    /// Record a warning, append it to the report and emit it
    pub(crate) fn with_warning(mut self, warning: ValidityWarning) -> Self {
        warn!(test = self.test.name(), "{}", warning);
        self.report.push_str(&format!(" Warning: {warning}"));
        self.warnings.push(warning);
        self
    }

    pub(crate) fn with_chi2(mut self, chi2: TestResult) -> Self {
        self.chi2 = Some(Box::new(chi2));
        self
    }

    pub fn family(&self) -> TestFamily {
        self.test.family()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: statistic = {:.6}, p-value = {:.6}, alpha = {}, result = {}",
            self.test, self.statistic, self.p_value, self.significance, self.result
        )?;
        write!(f, "{}", self.report)?;
        if let Some(chi2) = &self.chi2 {
            write!(f, "\n  chi2 -> {}", chi2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_direction() {
        let stat = TestStatistic::new(0.9, 0.03, 20);
        assert!(!TestResult::new(TestKind::ShapiroWilk, stat, 0.05).result);
        assert!(TestResult::new(TestKind::Pearson, stat, 0.05).result);
        assert!(!TestResult::new(TestKind::ChiSquared, stat, 0.01).result);
    }

    #[test]
    fn test_report_layout() {
        let result = TestResult::new(TestKind::Spearman, TestStatistic::new(0.5, 0.2, 12), 0.05)
            .with_preamble("Samples do not have normal distribution. ");
        assert!(result.report.starts_with("Samples do not have normal distribution. The null"));
        assert!(result.report.contains("test applied = spearman"));
        assert!(result.report.contains("p-value = 0.2"));
    }

    #[test]
    fn test_warnings_are_recorded_and_reported() {
        let result = TestResult::new(TestKind::DAgostino, TestStatistic::new(1.0, 0.6, 12), 0.05)
            .with_warning(ValidityWarning::SmallSample {
                test: TestKind::DAgostino,
                n: 12,
                recommended: 20,
            });
        assert!(result.has_warnings());
        assert!(result.report.contains("Warning: dagostinos is not reliable"));
    }
}
