//! Error types for hypothesis testing
//!
//! Provides a unified error type for all hypotest crates.

use thiserror::Error;

/// Core error type for hypothesis testing and preprocessing
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data (shape, length or content)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Sample has the wrong kind of values for the requested test
    #[error("Type mismatch: expected {expected} values, got {got}. {hint}")]
    TypeMismatch {
        expected: &'static str,
        got: String,
        hint: &'static str,
    },

    /// A method or test name outside the supported set
    #[error("Unsupported method `{method}`, choose one of: {}", supported.join(", "))]
    UnsupportedMethod {
        method: String,
        supported: &'static [&'static str],
    },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Column lookup failed
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// A stateful transform was used before it was fitted
    #[error("Not fitted: {0}")]
    NotFitted(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error (CSV reading, casting, frame operations)
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a numeric test handed non-numeric data
    pub fn non_numeric(got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: "numeric",
            got: got.into(),
            hint: "Try using categorical_test instead.",
        }
    }

    /// Create an error for an unknown method name
    pub fn unsupported(method: &str, supported: &'static [&'static str]) -> Self {
        Self::UnsupportedMethod {
            method: method.to_string(),
            supported,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for an out-of-range significance level
    pub fn invalid_significance(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InsufficientData { expected: 3, actual: 2 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 3 samples, got 2"
        );

        let err = Error::NotFitted("normalizer".to_string());
        assert_eq!(err.to_string(), "Not fitted: normalizer");
    }

    #[test]
    fn test_non_numeric_names_the_alternative() {
        let err = Error::non_numeric("str");
        let msg = err.to_string();
        assert!(msg.contains("expected numeric values, got str"));
        assert!(msg.contains("categorical_test"));
    }

    #[test]
    fn test_unsupported_lists_supported_set() {
        let err = Error::unsupported("cramer", &["default", "chi2", "fisher_exact"]);
        assert_eq!(
            err.to_string(),
            "Unsupported method `cramer`, choose one of: default, chi2, fisher_exact"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::size_mismatch(10, 8, "paired samples");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in paired samples: expected 10, got 8"
        );

        let err = Error::non_finite("sample");
        assert_eq!(
            err.to_string(),
            "Computation error: sample contains NaN or infinite values"
        );

        let err = Error::invalid_significance(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Significance level 1.5 must be in (0, 1)"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}
