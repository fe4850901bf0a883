//! Trait implemented by every independence test

use crate::ContingencyTable;
use hypotest_core::{Result, TestStatistic};

/// A test of the null hypothesis that the row and column variables of a
/// contingency table are independent
pub trait IndependenceTest {
    /// Name used in reports
    fn name(&self) -> &'static str;

    /// Compute the statistic and p-value
    fn test(&self, table: &ContingencyTable) -> Result<TestStatistic>;
}
