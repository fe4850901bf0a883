//! Types shared by the backend tests

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw outcome of a backend test: statistic and p-value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestStatistic {
    /// Value of the test statistic (W, K², χ², odds ratio, r, ρ or τ)
    pub statistic: f64,
    /// Probability of a result at least as extreme under the null hypothesis
    pub p_value: f64,
    /// Degrees of freedom, for tests that have them
    pub degrees_of_freedom: Option<f64>,
    /// Number of observations the statistic was computed from
    pub sample_size: usize,
}

impl TestStatistic {
    pub fn new(statistic: f64, p_value: f64, sample_size: usize) -> Self {
        Self {
            statistic,
            p_value,
            degrees_of_freedom: None,
            sample_size,
        }
    }

    pub fn with_degrees_of_freedom(mut self, dof: f64) -> Self {
        self.degrees_of_freedom = Some(dof);
        self
    }
}

impl fmt::Display for TestStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "statistic = {:.6}, p-value = {:.6} (n = {})",
            self.statistic, self.p_value, self.sample_size
        )
    }
}

/// Sidedness of the alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    #[default]
    TwoSided,
    Greater,
    Less,
}

impl Alternative {
    pub const NAMES: &'static [&'static str] = &["two-sided", "greater", "less"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::Greater => "greater",
            Self::Less => "less",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "two-sided" | "two_sided" => Ok(Self::TwoSided),
            "greater" => Ok(Self::Greater),
            "less" => Ok(Self::Less),
            other => Err(Error::unsupported(other, Self::NAMES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_parsing() {
        assert_eq!("two-sided".parse::<Alternative>().unwrap(), Alternative::TwoSided);
        assert_eq!("less".parse::<Alternative>().unwrap(), Alternative::Less);
        let err = "sideways".parse::<Alternative>().unwrap_err();
        assert!(err.to_string().contains("two-sided, greater, less"));
    }

    #[test]
    fn test_statistic_builder() {
        let stat = TestStatistic::new(3.2, 0.07, 40).with_degrees_of_freedom(1.0);
        assert_eq!(stat.degrees_of_freedom, Some(1.0));
        assert!(stat.to_string().contains("n = 40"));
    }
}
