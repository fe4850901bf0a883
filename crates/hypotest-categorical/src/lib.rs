//! Categorical independence tests
//!
//! Two samples of labels are cross-tabulated into a [`ContingencyTable`],
//! which is then handed to one of the [`IndependenceTest`] backends. The
//! tests themselves come from `anofox-tests`; this crate validates the table
//! and adapts the results.
//!
//! - **Chi-squared** ([`ChiSquaredIndependence`]), any table from 2x2 up,
//!   Yates-corrected when it has a single degree of freedom
//! - **Fisher's exact** ([`FisherExact`]), 2x2 tables only
//!
//! # Example
//!
//! ```rust
//! use hypotest_categorical::{ContingencyTable, FisherExact, IndependenceTest};
//!
//! let table = ContingencyTable::from_counts(vec![vec![2, 3], vec![4, 1]]).unwrap();
//! let outcome = FisherExact.test(&table).unwrap();
//! assert!((outcome.p_value - 0.5238).abs() < 1e-3);
//! ```

mod chi_squared;
mod contingency;
mod fisher;
mod traits;

pub use chi_squared::ChiSquaredIndependence;
pub use contingency::ContingencyTable;
pub use fisher::FisherExact;
pub use traits::IndependenceTest;

use hypotest_core::Error;

/// Convert anofox_tests StatError to our Error
pub(crate) fn convert_error(e: anofox_tests::StatError) -> Error {
    Error::Computation(e.to_string())
}

// Convenience constructors
pub fn chi_squared() -> ChiSquaredIndependence {
    ChiSquaredIndependence::new()
}

pub fn fisher_exact() -> FisherExact {
    FisherExact::new()
}
