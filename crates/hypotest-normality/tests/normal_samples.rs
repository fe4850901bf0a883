//! Behaviour of both normality tests on generated samples

use hypotest_normality::{dagostino, shapiro_wilk, NormalityTest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal, StandardNormal};
use statrs::distribution::{ContinuousCDF, Normal as StatrsNormal};

/// Expected normal order statistics, the most "normal" sample possible
fn normal_scores(n: usize) -> Vec<f64> {
    let normal = StatrsNormal::new(10.0, 2.0).unwrap();
    (1..=n)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (n as f64 + 0.25)))
        .collect()
}

fn exponential_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let exp = Exp::new(1.0).unwrap();
    (0..n).map(|_| exp.sample(&mut rng)).collect()
}

#[test]
fn test_normal_scores_look_normal() {
    for n in [10, 25, 100, 500] {
        let data = normal_scores(n);
        let sw = shapiro_wilk().test(&data).unwrap();
        assert!(sw.statistic > 0.97, "n={n}: W={}", sw.statistic);
        assert!(sw.p_value > 0.5, "n={n}: p={}", sw.p_value);
    }

    let data = normal_scores(200);
    let k2 = dagostino().test(&data).unwrap();
    assert!(k2.p_value > 0.5, "p={}", k2.p_value);
}

#[test]
fn test_heavy_skew_is_rejected() {
    let data = exponential_sample(300, 7);
    let sw = shapiro_wilk().test(&data).unwrap();
    assert!(sw.p_value < 0.001, "p={}", sw.p_value);

    let k2 = dagostino().test(&data).unwrap();
    assert!(k2.p_value < 0.001, "p={}", k2.p_value);
}

#[test]
fn test_uniform_grid_is_rejected_by_shapiro() {
    let data: Vec<f64> = (0..100).map(f64::from).collect();
    let sw = shapiro_wilk().test(&data).unwrap();
    assert!(sw.statistic < 0.97);
    assert!(sw.p_value < 0.05, "p={}", sw.p_value);
}

#[test]
fn test_statistic_is_location_scale_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let data: Vec<f64> = (0..60).map(|_| StandardNormal.sample(&mut rng)).collect();
    let shifted: Vec<f64> = data.iter().map(|x| 3.0 * x + 100.0).collect();

    for test in [&shapiro_wilk() as &dyn NormalityTest, &dagostino()] {
        let a = test.test(&data).unwrap();
        let b = test.test(&shifted).unwrap();
        assert!((a.statistic - b.statistic).abs() < 1e-6, "{}", test.name());
        assert!((a.p_value - b.p_value).abs() < 1e-6, "{}", test.name());
    }
}

#[test]
fn test_p_values_are_probabilities() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data: Vec<f64> = (0..30).map(|_| normal.sample(&mut rng)).collect();
        for test in [&shapiro_wilk() as &dyn NormalityTest, &dagostino()] {
            let outcome = test.test(&data).unwrap();
            assert!((0.0..=1.0).contains(&outcome.p_value));
        }
    }
}
