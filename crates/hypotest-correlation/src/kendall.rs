//! Kendall rank correlation (tau-b)

use crate::CorrelationTest;
use hypotest_core::utils::sorted;
use hypotest_core::{Alternative, Error, Result, TestStatistic};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

/// Largest tie-free sample for which the exact null distribution is used
pub const KENDALL_EXACT_MAX_N: usize = 33;

/// Kendall's tau-b
///
/// Tie-free samples of up to [`KENDALL_EXACT_MAX_N`] pairs get the exact
/// p-value from the permutation distribution of `S`; otherwise `S` is
/// compared with its tie-corrected normal approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct KendallTau;

impl KendallTau {
    pub fn new() -> Self {
        Self
    }
}

/// Tie sums over groups of equal values: `(Σ t(t-1)/2, Σ t(t-1)(t-2), Σ t(t-1)(2t+5))`
fn tie_sums(data: &[f64]) -> (f64, f64, f64) {
    let values = sorted(data);
    let mut sums = (0.0, 0.0, 0.0);
    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() && values[j] == values[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        if t > 1.0 {
            sums.0 += t * (t - 1.0) / 2.0;
            sums.1 += t * (t - 1.0) * (t - 2.0);
            sums.2 += t * (t - 1.0) * (2.0 * t + 5.0);
        }
        i = j;
    }
    sums
}

/// Concordant minus discordant pairs; pairs tied on either side count zero
fn score(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    let mut s = 0i64;
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];
            s += match (dx * dy).partial_cmp(&0.0) {
                Some(std::cmp::Ordering::Greater) => 1,
                Some(std::cmp::Ordering::Less) => -1,
                _ => 0,
            };
        }
    }
    s as f64
}

/// Permutations of `n` items with at most `c` inversions
fn permutations_with_at_most(n: usize, c: usize) -> f64 {
    // counts[k]: permutations of the first j items with exactly k inversions
    let mut counts = vec![0.0; c + 1];
    counts[0] = 1.0;
    for j in 2..=n {
        let previous = counts.clone();
        let mut window = 0.0;
        for k in 0..=c {
            window += previous[k];
            if k >= j {
                window -= previous[k - j];
            }
            counts[k] = window;
        }
    }
    counts.iter().sum()
}

/// Exact p-value of `S` for `n` tie-free pairs
fn exact_p_value(n: usize, s: f64, alternative: Alternative) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    let total = n * (n - 1) / 2;
    let concordant = ((total as f64 + s) / 2.0).round() as usize;
    let discordant = total - concordant;
    let in_right_tail = concordant >= discordant;
    let c = concordant.min(discordant);

    let factorial: f64 = (2..=n).map(|k| k as f64).product();
    let two_sided = 2.0 * permutations_with_at_most(n, c) / factorial;
    let p = match alternative {
        Alternative::TwoSided => two_sided,
        Alternative::Greater if in_right_tail => two_sided / 2.0,
        Alternative::Less if !in_right_tail => two_sided / 2.0,
        _ => 1.0 - two_sided / 2.0,
    };
    p.clamp(0.0, 1.0)
}

impl CorrelationTest for KendallTau {
    fn name(&self) -> &'static str {
        "kendalltau"
    }

    fn correlate(&self, x: &[f64], y: &[f64], alternative: Alternative) -> Result<TestStatistic> {
        self.check_pair(x, y)?;
        let n = x.len() as f64;
        let total = n * (n - 1.0) / 2.0;
        let (x_tie, x0, x1) = tie_sums(x);
        let (y_tie, y0, y1) = tie_sums(y);
        if x_tie == total || y_tie == total {
            return Err(Error::Computation(
                "Correlation is undefined when a sample is constant".to_string(),
            ));
        }

        let s = score(x, y);
        let tau = (s / ((total - x_tie).sqrt() * (total - y_tie).sqrt())).clamp(-1.0, 1.0);

        let exact = x_tie == 0.0
            && y_tie == 0.0
            && (x.len() <= KENDALL_EXACT_MAX_N || (total - s.abs()) / 2.0 <= 1.0);
        let (z, p_value) = if exact {
            (f64::NAN, exact_p_value(x.len(), s, alternative))
        } else {
            let m = n * (n - 1.0);
            let variance = (m * (2.0 * n + 5.0) - x1 - y1) / 18.0
                + 2.0 * x_tie * y_tie / m
                + x0 * y0 / (9.0 * m * (n - 2.0));
            let z = s / variance.sqrt();
            let normal = Normal::new(0.0, 1.0).map_err(|e| {
                Error::Computation(format!("Failed to create normal distribution: {}", e))
            })?;
            let p = match alternative {
                Alternative::TwoSided => 2.0 * normal.cdf(-z.abs()),
                Alternative::Greater => normal.cdf(-z),
                Alternative::Less => normal.cdf(z),
            };
            (z, p.clamp(0.0, 1.0))
        };

        debug!(
            "Kendall tau-b: n={}, S={}, tau={:.6}, z={:.4}, p={:.6} ({}, exact={})",
            x.len(),
            s,
            tau,
            z,
            p_value,
            alternative,
            exact
        );
        Ok(TestStatistic::new(tau, p_value, x.len()))
    }
}
