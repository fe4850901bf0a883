//! Normality tests
//!
//! Two tests of the null hypothesis "the sample was drawn from a normal
//! distribution", both behind the [`NormalityTest`] trait and both computed
//! by `anofox-tests`:
//!
//! - **Shapiro-Wilk** (`W`), Royston's AS R94 approximation, `3 <= n <= 5000`
//! - **D'Agostino-Pearson K²**, skewness and kurtosis combined, `n >= 8`
//!   (kurtosis is unreliable below `n = 20`)
//!
//! # Example
//!
//! ```rust
//! use hypotest_normality::{shapiro_wilk, NormalityTest};
//!
//! let sample = [2.1, 2.5, 2.9, 3.0, 3.2, 3.4, 3.9, 4.4];
//! let outcome = shapiro_wilk().test(&sample).unwrap();
//! assert!(outcome.statistic > 0.0 && outcome.statistic <= 1.0);
//! ```

mod dagostino;
mod shapiro_wilk;
mod traits;

pub use dagostino::{DAgostinoComponents, DAgostinoPearson, DAGOSTINO_RELIABLE_N};
pub use shapiro_wilk::ShapiroWilk;
pub use traits::NormalityTest;

use hypotest_core::Error;

/// Convert anofox_tests StatError to our Error
pub(crate) fn convert_error(e: anofox_tests::StatError) -> Error {
    Error::Computation(e.to_string())
}

// Convenience constructors
pub fn shapiro_wilk() -> ShapiroWilk {
    ShapiroWilk::new()
}

pub fn dagostino() -> DAgostinoPearson {
    DAgostinoPearson::new()
}
