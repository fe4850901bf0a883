//! Fisher's exact test for 2x2 tables

use crate::{convert_error, ContingencyTable, IndependenceTest};
use anofox_tests::{fisher_exact, Alternative};
use hypotest_core::{Error, Result, TestStatistic};
use tracing::debug;

/// Fisher's exact test
///
/// The statistic is the sample odds ratio `(a d) / (b c)`. The two-sided
/// p-value sums the hypergeometric probabilities of every table with the
/// observed margins that is no more likely than the observed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FisherExact;

impl FisherExact {
    pub fn new() -> Self {
        Self
    }
}

fn odds_ratio(a: u64, b: u64, c: u64, d: u64) -> f64 {
    let num = (a * d) as f64;
    let den = (b * c) as f64;
    if den == 0.0 {
        if num == 0.0 {
            f64::NAN
        } else {
            f64::INFINITY
        }
    } else {
        num / den
    }
}

impl IndependenceTest for FisherExact {
    fn name(&self) -> &'static str {
        "fisher_exact"
    }

    fn test(&self, table: &ContingencyTable) -> Result<TestStatistic> {
        if !table.is_2x2() {
            let (rows, cols) = table.shape();
            return Err(Error::InvalidInput(format!(
                "Fisher's exact test requires a 2x2 table, got {rows}x{cols}"
            )));
        }
        let counts = table.counts();
        let (a, b, c, d) = (counts[0][0], counts[0][1], counts[1][0], counts[1][1]);
        let total = a + b + c + d;
        if total == 0 {
            return Err(Error::InvalidInput("Contingency table is empty".to_string()));
        }

        let cells = [[a as usize, b as usize], [c as usize, d as usize]];
        let result = fisher_exact(&cells, Alternative::TwoSided).map_err(convert_error)?;
        let p_value = result.p_value.min(1.0);
        let statistic = odds_ratio(a, b, c, d);

        debug!(
            "Fisher exact: table=[[{a}, {b}], [{c}, {d}]], odds ratio={:.6}, p={:.6}",
            statistic, p_value
        );
        Ok(TestStatistic::new(statistic, p_value, total as usize))
    }
}
