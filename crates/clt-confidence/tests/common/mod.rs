//! Common test utilities for clt-confidence tests

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

/// Deterministic normal sample for repeatable assertions
pub fn seeded_normal_sample(seed: u64, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Expand counts into a 0/1 indicator sample
pub fn indicators(successes: usize, n: usize) -> Vec<f64> {
    let mut sample = vec![1.0; successes];
    sample.resize(n, 0.0);
    sample
}
