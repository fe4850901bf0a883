//! Method selectors accepted by the [`Tester`](crate::Tester)
//!
//! Each enum parses from the names used on the command line and in
//! configuration files; an unknown name fails with
//! [`Error::UnsupportedMethod`](hypotest_core::Error::UnsupportedMethod)
//! listing the accepted ones.

use hypotest_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normality test to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalityMethod {
    /// Shapiro-Wilk W test
    #[default]
    ShapiroWilk,
    /// D'Agostino-Pearson K² test
    #[serde(rename = "dagostinos")]
    DAgostino,
}

impl NormalityMethod {
    pub const NAMES: &'static [&'static str] = &["shapiro-wilk", "dagostinos"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ShapiroWilk => "shapiro-wilk",
            Self::DAgostino => "dagostinos",
        }
    }
}

impl FromStr for NormalityMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shapiro-wilk" | "shapiro" => Ok(Self::ShapiroWilk),
            "dagostinos" | "dagostino" | "normaltest" => Ok(Self::DAgostino),
            other => Err(Error::unsupported(other, Self::NAMES)),
        }
    }
}

/// Categorical independence test to apply
///
/// `Default` lets the selector choose from the table's cell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalMethod {
    #[default]
    Default,
    #[serde(rename = "chi2")]
    ChiSquared,
    FisherExact,
}

impl CategoricalMethod {
    pub const NAMES: &'static [&'static str] = &["default", "chi2", "fisher_exact"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ChiSquared => "chi2",
            Self::FisherExact => "fisher_exact",
        }
    }
}

impl FromStr for CategoricalMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "default" => Ok(Self::Default),
            "chi2" => Ok(Self::ChiSquared),
            "fisher_exact" | "fisher" => Ok(Self::FisherExact),
            other => Err(Error::unsupported(other, Self::NAMES)),
        }
    }
}

/// Correlation test to apply when the caller bypasses the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
    KendallTau,
}

impl CorrelationMethod {
    pub const NAMES: &'static [&'static str] = &["pearson", "spearman", "kendalltau"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
            Self::KendallTau => "kendalltau",
        }
    }
}

impl FromStr for CorrelationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pearson" => Ok(Self::Pearson),
            "spearman" => Ok(Self::Spearman),
            "kendall" | "kendalltau" => Ok(Self::KendallTau),
            other => Err(Error::unsupported(other, Self::NAMES)),
        }
    }
}

/// Whether the correlation samples should be treated as 0/1 data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryHint {
    /// Inspect both samples
    #[default]
    Auto,
    Yes,
    No,
}

impl BinaryHint {
    pub const NAMES: &'static [&'static str] = &["", "yes", "no"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl FromStr for BinaryHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "auto" => Ok(Self::Auto),
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(Error::unsupported(other, Self::NAMES)),
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_by_name!(NormalityMethod, CategoricalMethod, CorrelationMethod, BinaryHint);
