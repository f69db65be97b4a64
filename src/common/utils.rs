use rand::{rng, Rng};
use std::time::Duration;

pub fn chance(probability: f64) -> bool {
    let mut rng = rng();
    rng.random_bool(probability.clamp(0.0, 1.0))
}

/// Uniform pause in [min_ms, max_ms).
pub fn random_interference_pause(min_ms: u64, max_ms: u64) -> Duration {
    let mut rng = rng();
    let upper = max_ms.max(min_ms + 1);
    Duration::from_millis(rng.random_range(min_ms..upper))
}
