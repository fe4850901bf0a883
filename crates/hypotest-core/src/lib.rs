//! Core types for hypothesis testing
//!
//! This crate holds what every other hypotest crate shares:
//!
//! - [`Error`] and [`Result`], the single error type of the workspace
//! - [`sample`], reading polars series as numeric samples or categorical
//!   [`Level`]s
//! - [`TestStatistic`] and [`Alternative`], the raw backend test outcome
//! - [`utils`], slice helpers (ranks, moments, validation)
//!
//! # Example
//!
//! ```rust
//! use hypotest_core::sample;
//! use polars::prelude::*;
//!
//! let frame = df![
//!     "Age" => [22.0, 38.0, 26.0],
//!     "Sex" => ["male", "female", "female"],
//! ]
//! .unwrap();
//!
//! assert!(sample::is_numeric(sample::column(&frame, "Age").unwrap()));
//! let sex = sample::column(&frame, "Sex").unwrap();
//! assert_eq!(sample::distinct_levels(sex).unwrap().len(), 2);
//! ```

pub mod error;
pub mod sample;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use sample::Level;
pub use types::{Alternative, TestStatistic};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Alternative, Error, Level, Result, TestStatistic};
}
