//! Roulette-wheel sampling over a weight vector.
//!
//! Isolated as a pure function so the degenerate-weight edge cases can be
//! unit-tested deterministically with a seeded [`AntRng`].

use aco_core::AntRng;

/// Sample an index proportionally to `weights`.
///
/// Weights must be non-negative.  Two degenerate cases are recovered locally
/// rather than surfaced as errors:
///
/// - an all-zero vector (every candidate scored 0) falls back to a uniform
///   choice among all indices;
/// - a non-finite sum (an overflow or infinity that slipped into a score)
///   does the same, since proportions are meaningless in that case.
///
/// Returns `None` only for an empty vector.
pub fn sample_weighted(weights: &[f64], rng: &mut AntRng) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    debug_assert!(weights.iter().all(|w| !(*w < 0.0)), "negative weight");

    let total: f64 = weights.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        return Some(rng.gen_range(0..weights.len()));
    }

    let mut threshold = rng.gen_unit() * total;
    for (i, &w) in weights.iter().enumerate() {
        threshold -= w;
        if threshold <= 0.0 {
            return Some(i);
        }
    }
    // Float rounding can leave a sliver of threshold after the last weight.
    Some(weights.len() - 1)
}
