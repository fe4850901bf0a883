//! Correlation tests
//!
//! Three tests of association between two paired numeric samples, behind
//! the [`CorrelationTest`] trait:
//!
//! - **Pearson** r, linear association (point-biserial on 0/1 data)
//! - **Spearman** rho, monotone association on average ranks
//! - **Kendall** tau-b, pair concordance with tie correction
//!
//! Every test accepts an [`Alternative`](hypotest_core::Alternative) and
//! needs at least three pairs.
//!
//! # Example
//!
//! ```rust
//! use hypotest_core::Alternative;
//! use hypotest_correlation::{spearman, CorrelationTest};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [1.0, 4.0, 9.0, 16.0, 25.0];
//! let outcome = spearman().correlate(&x, &y, Alternative::TwoSided).unwrap();
//! assert_eq!(outcome.statistic, 1.0);
//! ```

mod kendall;
mod pearson;
mod spearman;
mod traits;

pub use kendall::KendallTau;
pub use pearson::Pearson;
pub use spearman::Spearman;
pub use traits::CorrelationTest;

// Convenience constructors
pub fn pearson() -> Pearson {
    Pearson::new()
}

pub fn spearman() -> Spearman {
    Spearman::new()
}

pub fn kendall_tau() -> KendallTau {
    KendallTau::new()
}
