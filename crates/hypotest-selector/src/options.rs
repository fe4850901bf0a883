//! Per-call options for the three test families

use crate::method::{BinaryHint, CategoricalMethod, CorrelationMethod, NormalityMethod};
use hypotest_core::{Alternative, Error, Result};
use serde::{Deserialize, Serialize};

/// Default significance level
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Check that `alpha` lies strictly between 0 and 1
pub fn check_significance(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_significance(alpha))
    }
}

/// Options for [`Tester::normality_test`](crate::Tester::normality_test)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalityOptions {
    pub significance: f64,
    pub method: NormalityMethod,
}

impl Default for NormalityOptions {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            method: NormalityMethod::default(),
        }
    }
}

impl NormalityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    pub fn with_method(mut self, method: NormalityMethod) -> Self {
        self.method = method;
        self
    }
}

/// Options for [`Tester::categorical_test`](crate::Tester::categorical_test)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalOptions {
    pub significance: f64,
    pub method: CategoricalMethod,
}

impl Default for CategoricalOptions {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            method: CategoricalMethod::default(),
        }
    }
}

impl CategoricalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    pub fn with_method(mut self, method: CategoricalMethod) -> Self {
        self.method = method;
        self
    }
}

/// Options for [`Tester::correlation_test`](crate::Tester::correlation_test)
///
/// Leaving `method` unset lets the selector choose between Pearson and
/// Spearman.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationOptions {
    pub significance: f64,
    pub alternative: Alternative,
    pub method: Option<CorrelationMethod>,
    pub binary: BinaryHint,
}

impl Default for CorrelationOptions {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            alternative: Alternative::default(),
            method: None,
            binary: BinaryHint::default(),
        }
    }
}

impl CorrelationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    pub fn with_method(mut self, method: CorrelationMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_binary(mut self, binary: BinaryHint) -> Self {
        self.binary = binary;
        self
    }
}
