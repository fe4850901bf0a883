//! Pearson product-moment correlation

use crate::CorrelationTest;
use hypotest_core::utils::mean;
use hypotest_core::{Alternative, Error, Result, TestStatistic};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

/// Pearson's r with a Student's t p-value on `n - 2` degrees of freedom
///
/// On a 0/1 sample this is the point-biserial correlation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson;

impl Pearson {
    pub fn new() -> Self {
        Self
    }
}

/// Sample correlation coefficient, clamped to [-1, 1]
pub(crate) fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64> {
    let (mx, my) = (mean(x), mean(y));
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(Error::Computation(
            "Correlation is undefined when a sample is constant".to_string(),
        ));
    }
    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// p-value of a correlation coefficient through `t = r sqrt(df / (1 - r²))`
pub(crate) fn r_p_value(r: f64, n: usize, alternative: Alternative) -> Result<f64> {
    let df = (n - 2) as f64;
    if (1.0 - r.abs()) <= 0.0 {
        // perfect correlation: t is infinite
        return Ok(match alternative {
            Alternative::TwoSided => 0.0,
            Alternative::Greater => if r > 0.0 { 0.0 } else { 1.0 },
            Alternative::Less => if r < 0.0 { 0.0 } else { 1.0 },
        });
    }

    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        Error::Computation(format!("Failed to create t distribution: {}", e))
    })?;
    let p = match alternative {
        Alternative::TwoSided => 2.0 * dist.cdf(-t.abs()),
        Alternative::Greater => dist.cdf(-t),
        Alternative::Less => dist.cdf(t),
    };
    Ok(p.clamp(0.0, 1.0))
}

impl CorrelationTest for Pearson {
    fn name(&self) -> &'static str {
        "pearson"
    }

    fn correlate(&self, x: &[f64], y: &[f64], alternative: Alternative) -> Result<TestStatistic> {
        self.check_pair(x, y)?;
        let r = pearson_r(x, y)?;
        let p_value = r_p_value(r, x.len(), alternative)?;

        debug!("Pearson: n={}, r={:.6}, p={:.6} ({})", x.len(), r, p_value, alternative);
        Ok(TestStatistic::new(r, p_value, x.len()).with_degrees_of_freedom((x.len() - 2) as f64))
    }
}
