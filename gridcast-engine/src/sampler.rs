//! Weighted order sampling and per-trial seed derivation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Derive the RNG seed for one trial.
///
/// Hashing `(year, trial_index)` under the base seed makes every trial's
/// seed independent of dispatch order, so trials can run on a worker pool in
/// any order while the whole run stays bit-for-bit reproducible.
pub fn trial_seed(base_seed: u64, year: i32, trial: u32) -> u64 {
    let mut buf = [0u8; 8];
    buf[..4].copy_from_slice(&year.to_le_bytes());
    buf[4..].copy_from_slice(&trial.to_le_bytes());
    xxh3_64_with_seed(&buf, base_seed)
}

/// Draw a full weighted-without-replacement ordering of `weights.len()`
/// items. Returns positions into `weights`, first-drawn first.
///
/// Uses exponential order keys: item `i` gets key `-ln(u)/w_i`, and sorting
/// ascending is distributionally identical to repeated weighted draws
/// without replacement, in O(n log n). Deterministic given `seed`.
pub fn sample_order(weights: &[f64], seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut keys: Vec<(f64, usize)> = weights
        .iter()
        .enumerate()
        .map(|(idx, &weight)| {
            let u: f64 = rng.random::<f64>();
            // Guard ln(0); random() is in [0, 1).
            let key = -u.max(f64::MIN_POSITIVE).ln() / weight;
            (key, idx)
        })
        .collect();

    keys.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    keys.into_iter().map(|(_, idx)| idx).collect()
}
