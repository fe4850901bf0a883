//! Data preparation for hypothesis testing
//!
//! - [`Spreadsheet`] loads a CSV file into a polars `DataFrame` through
//!   the polars CSV reader
//! - [`Preprocessing`] drops rows holding nulls and encodes categorical
//!   columns (one-hot through polars `to_dummies`, or ordinal codes),
//!   recording each step so it can be replayed on new data
//! - [`Normalizer`] scales columns by z-score, min-max or log10 and can
//!   invert the scaling
//!
//! # Example
//!
//! ```rust
//! use hypotest_preprocess::{Preprocessing, Spreadsheet};
//!
//! let csv = "Survived,Sex,Age\n0,male,22\n1,female,\n1,female,26\n";
//! let frame = Spreadsheet::new().read(csv.as_bytes(), None).unwrap();
//!
//! let mut pipeline = Preprocessing::new(None);
//! let cleaned = pipeline.clean_data(&frame, true).unwrap();
//! assert_eq!(cleaned.height(), 2);
//! ```

pub mod normalization;
pub mod preprocessing;
pub mod spreadsheet;

pub use normalization::{ColumnStatistics, Normalizer, NormalizerConfig};
pub use preprocessing::{Encoding, Preprocessing, Step, MISSING_CODE, UNKNOWN_CODE};
pub use spreadsheet::{DataSource, Spreadsheet, MISSING_MARKERS};
