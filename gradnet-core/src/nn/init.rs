use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Weights are drawn uniformly from `[-WEIGHT_INIT_BOUND, WEIGHT_INIT_BOUND)`.
pub const WEIGHT_INIT_BOUND: f64 = 1.0;

/// Every bias starts at this value.
pub const BIAS_INIT: f64 = 0.0;

/// Draws `count` weights uniformly from `[-WEIGHT_INIT_BOUND, WEIGHT_INIT_BOUND)`.
pub fn uniform_weights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    let dist = Uniform::new(-WEIGHT_INIT_BOUND, WEIGHT_INIT_BOUND);
    (0..count).map(|_| dist.sample(rng)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
