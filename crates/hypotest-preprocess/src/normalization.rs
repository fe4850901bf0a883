//! Column scaling with fitted statistics
//!
//! A [`Normalizer`] is configured with the columns to scale per method,
//! learns per-column statistics in [`fit`](Normalizer::fit), and applies
//! them in [`transform`](Normalizer::transform) and
//! [`inverse_transform`](Normalizer::inverse_transform).

use hypotest_core::utils::{mean, median, std_dev};
use hypotest_core::{sample, Error, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Columns to scale, per method
///
/// Deserializes from JSON such as
/// `{"zscore": ["Fare"], "min-max": ["Age"], "log10": []}`; absent keys
/// mean no columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// `(x - mean) / std`
    pub zscore: Vec<String>,
    /// `(x - min) / (max - min)`
    #[serde(rename = "min-max")]
    pub min_max: Vec<String>,
    /// `log10(x)`
    pub log10: Vec<String>,
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zscore<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.zscore.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn with_min_max<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.min_max.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn with_log10<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.log10.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Every configured column, without duplicates, in first-seen order
    pub fn columns(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for name in self.zscore.iter().chain(&self.min_max).chain(&self.log10) {
            if !out.contains(&name.as_str()) {
                out.push(name);
            }
        }
        out
    }
}

/// Summary of one column, missing values skipped
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStatistics {
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1)
    pub std: f64,
    pub mean: f64,
    pub median: f64,
}

impl ColumnStatistics {
    fn from_values(values: &[f64]) -> Self {
        let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        let (min, max) = if present.is_empty() {
            (f64::NAN, f64::NAN)
        } else {
            present
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
        };
        Self {
            min,
            max,
            std: if present.len() < 2 { f64::NAN } else { std_dev(&present) },
            mean: if present.is_empty() { f64::NAN } else { mean(&present) },
            median: median(&present),
        }
    }

    /// Divisor for z-scores; a constant column is only centred
    fn zscore_scale(&self) -> f64 {
        if self.std > 0.0 {
            self.std
        } else {
            1.0
        }
    }

    /// Divisor for min-max scaling; a constant column maps to zero
    fn range_scale(&self) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            range
        } else {
            1.0
        }
    }
}

/// Scales configured columns of a [`DataFrame`]
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    statistics: BTreeMap<String, ColumnStatistics>,
    fitted: bool,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            statistics: BTreeMap::new(),
            fitted: false,
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Compute min, max, std, mean and median of every configured column
    pub fn statistics(
        &mut self,
        frame: &DataFrame,
    ) -> Result<&BTreeMap<String, ColumnStatistics>> {
        let mut statistics = BTreeMap::new();
        for name in self.config.columns() {
            let values = sample::values(sample::column(frame, name)?)?;
            let stats = ColumnStatistics::from_values(&values);
            debug!("statistics of `{}`: {:?}", name, stats);
            statistics.insert(name.to_string(), stats);
        }
        self.statistics = statistics;
        Ok(&self.statistics)
    }

    /// Statistics learned for `column` by the last `statistics` or `fit`
    pub fn column_statistics(&self, column: &str) -> Option<&ColumnStatistics> {
        self.statistics.get(column)
    }

    pub fn fit(&mut self, frame: &DataFrame) -> Result<()> {
        info!("Normalizer fitting");
        self.statistics(frame)?;
        self.fitted = true;
        Ok(())
    }

    /// Apply z-score, then log10, then min-max scaling
    pub fn transform(&self, frame: &DataFrame) -> Result<DataFrame> {
        info!("Normalizer transform");
        self.check_fitted()?;
        let mut out = frame.clone();
        for name in &self.config.zscore {
            let stats = self.stats(name)?;
            let scale = stats.zscore_scale();
            map_column(&mut out, name, |x| (x - stats.mean) / scale)?;
        }
        for name in &self.config.log10 {
            map_column(&mut out, name, f64::log10)?;
        }
        for name in &self.config.min_max {
            let stats = self.stats(name)?;
            let scale = stats.range_scale();
            map_column(&mut out, name, |x| (x - stats.min) / scale)?;
        }
        Ok(out)
    }

    /// Undo [`transform`](Self::transform), steps in reverse order
    pub fn inverse_transform(&self, frame: &DataFrame) -> Result<DataFrame> {
        info!("Normalizer inverse transform");
        self.check_fitted()?;
        let mut out = frame.clone();
        for name in &self.config.min_max {
            let stats = self.stats(name)?;
            let scale = stats.range_scale();
            map_column(&mut out, name, |x| x * scale + stats.min)?;
        }
        for name in &self.config.log10 {
            map_column(&mut out, name, |x| 10f64.powf(x))?;
        }
        for name in &self.config.zscore {
            let stats = self.stats(name)?;
            let scale = stats.zscore_scale();
            map_column(&mut out, name, |x| x * scale + stats.mean)?;
        }
        Ok(out)
    }

    pub fn fit_transform(&mut self, frame: &DataFrame) -> Result<DataFrame> {
        self.fit(frame)?;
        self.transform(frame)
    }

    fn check_fitted(&self) -> Result<()> {
        if self.fitted {
            Ok(())
        } else {
            Err(Error::NotFitted(
                "Normalizer must be fitted before transforming".to_string(),
            ))
        }
    }

    fn stats(&self, column: &str) -> Result<ColumnStatistics> {
        self.statistics
            .get(column)
            .copied()
            .ok_or_else(|| Error::InvalidColumn(format!("no statistics for column `{column}`")))
    }
}

/// Replace `name` with `f` applied to its values as `Float64`; nulls stay null
fn map_column(frame: &mut DataFrame, name: &str, f: impl Fn(f64) -> f64) -> Result<()> {
    let series = sample::column(frame, name)?;
    if !sample::is_numeric(series) {
        return Err(Error::non_numeric(series.dtype().to_string()));
    }
    let mapped: Float64Chunked = series
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .map(|v| v.map(&f))
        .collect();
    frame.replace(name, mapped.with_name(name.into()).into_series())?;
    Ok(())
}
