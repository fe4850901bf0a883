//! Samples as polars series
//!
//! Numeric tests read a [`Series`] as `f64` values; any series can be read
//! as categorical [`Level`]s.

use crate::{Error, Result};
use ordered_float::OrderedFloat;
use polars::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// A categorical label
///
/// Levels are totally ordered so contingency tables and ordinal codes come
/// out in a stable, sorted order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", v.0),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Level {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Look up a column of `frame` as a series
pub fn column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series> {
    frame
        .column(name)
        .map(|c| c.as_materialized_series())
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

/// Integer, float and boolean series count as numeric
pub fn is_numeric(series: &Series) -> bool {
    let dtype = series.dtype();
    dtype.is_primitive_numeric() || dtype.is_bool()
}

/// Numeric values as `f64`, nulls read as NaN
///
/// Fails with a type mismatch for non-numeric series.
pub fn values(series: &Series) -> Result<Vec<f64>> {
    if !is_numeric(series) {
        return Err(Error::non_numeric(series.dtype().to_string()));
    }
    let cast = series.cast(&DataType::Float64)?;
    Ok(cast
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

/// All values as levels, in row order; nulls and NaN are `None`
pub fn levels(series: &Series) -> Result<Vec<Option<Level>>> {
    let dtype = series.dtype();
    if dtype.is_integer() || dtype.is_bool() {
        let cast = series.cast(&DataType::Int64)?;
        Ok(cast.i64()?.into_iter().map(|v| v.map(Level::Int)).collect())
    } else if dtype.is_float() {
        let cast = series.cast(&DataType::Float64)?;
        Ok(cast
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()).map(Level::from))
            .collect())
    } else {
        let cast = series.cast(&DataType::String)?;
        Ok(cast.str()?.into_iter().map(|v| v.map(Level::from)).collect())
    }
}

/// Sorted distinct non-missing levels
pub fn distinct_levels(series: &Series) -> Result<Vec<Level>> {
    let set: BTreeSet<Level> = levels(series)?.into_iter().flatten().collect();
    Ok(set.into_iter().collect())
}

/// True when every value is exactly 0 or 1
///
/// Non-numeric series and series with missing values are never binary.
pub fn is_binary(series: &Series) -> bool {
    values(series)
        .map(|v| v.iter().all(|&x| x == 0.0 || x == 1.0))
        .unwrap_or(false)
}
