//! Cross-tabulation of two categorical samples

use hypotest_core::{sample, Error, Level, Result};
use polars::prelude::Series;
use std::collections::BTreeSet;
use std::fmt;

/// Counts of paired categorical outcomes
///
/// Rows are the sorted levels of the first sample, columns the sorted levels
/// of the second. Only levels that occur are kept, so every row and column
/// total is positive when the table was built from data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    row_levels: Vec<Level>,
    col_levels: Vec<Level>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Cross-tabulate two equally long series
    ///
    /// Pairs where either value is missing are skipped.
    pub fn from_series(sample1: &Series, sample2: &Series) -> Result<Self> {
        if sample1.len() != sample2.len() {
            return Err(Error::size_mismatch(
                sample1.len(),
                sample2.len(),
                "categorical samples",
            ));
        }
        Self::from_levels(&sample::levels(sample1)?, &sample::levels(sample2)?)
    }

    /// Cross-tabulate two equally long level sequences
    pub fn from_levels(sample1: &[Option<Level>], sample2: &[Option<Level>]) -> Result<Self> {
        if sample1.len() != sample2.len() {
            return Err(Error::size_mismatch(
                sample1.len(),
                sample2.len(),
                "categorical samples",
            ));
        }

        let pairs: Vec<(&Level, &Level)> = sample1
            .iter()
            .zip(sample2)
            .filter_map(|(a, b)| Some((a.as_ref()?, b.as_ref()?)))
            .collect();
        if pairs.is_empty() {
            return Err(Error::InvalidInput(
                "No complete pairs to cross-tabulate".to_string(),
            ));
        }

        let row_levels: Vec<Level> = pairs
            .iter()
            .map(|(a, _)| (*a).clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let col_levels: Vec<Level> = pairs
            .iter()
            .map(|(_, b)| (*b).clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut counts = vec![vec![0u64; col_levels.len()]; row_levels.len()];
        for (a, b) in pairs {
            // levels were collected from these very pairs
            let r = row_levels.binary_search(a).unwrap_or_default();
            let c = col_levels.binary_search(b).unwrap_or_default();
            counts[r][c] += 1;
        }

        Ok(Self {
            row_levels,
            col_levels,
            counts,
        })
    }

    /// Table from raw counts, with rows and columns labelled 0, 1, ...
    pub fn from_counts(counts: Vec<Vec<u64>>) -> Result<Self> {
        let n_cols = counts.first().map_or(0, Vec::len);
        if counts.is_empty() || n_cols == 0 {
            return Err(Error::InvalidInput("Empty contingency table".to_string()));
        }
        if let Some(i) = counts.iter().position(|row| row.len() != n_cols) {
            return Err(Error::InvalidInput(format!(
                "Row {i} has {} columns, expected {n_cols}",
                counts[i].len()
            )));
        }

        Ok(Self {
            row_levels: (0..counts.len() as i64).map(Level::Int).collect(),
            col_levels: (0..n_cols as i64).map(Level::Int).collect(),
            counts,
        })
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_levels.len(), self.col_levels.len())
    }

    pub fn is_2x2(&self) -> bool {
        self.shape() == (2, 2)
    }

    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    pub fn row_levels(&self) -> &[Level] {
        &self.row_levels
    }

    pub fn col_levels(&self) -> &[Level] {
        &self.col_levels
    }

    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.col_levels.len())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Expected counts under independence: `row_total * col_total / total`
    pub fn expected(&self) -> Vec<Vec<f64>> {
        let total = self.total() as f64;
        let cols = self.col_totals();
        self.row_totals()
            .iter()
            .map(|&r| cols.iter().map(|&c| r as f64 * c as f64 / total).collect())
            .collect()
    }

    /// `(rows - 1) * (columns - 1)`
    pub fn degrees_of_freedom(&self) -> usize {
        let (r, c) = self.shape();
        r.saturating_sub(1) * c.saturating_sub(1)
    }

    /// True when some cell holds `threshold` or fewer observations
    pub fn any_cell_at_most(&self, threshold: u64) -> bool {
        self.counts.iter().flatten().any(|&n| n <= threshold)
    }

    /// Render with a header row of column levels
    pub fn render_with<T: fmt::Display>(&self, cells: &[Vec<T>]) -> String {
        let mut out = String::new();
        let header: Vec<String> = self.col_levels.iter().map(|l| format!("{l:>10}")).collect();
        out.push_str(&format!("{:>10} {}\n", "", header.join(" ")));
        for (level, row) in self.row_levels.iter().zip(cells) {
            let line: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
            out.push_str(&format!("{:>10} {}\n", level.to_string(), line.join(" ")));
        }
        out
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&self.counts))
    }
}
