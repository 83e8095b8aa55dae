//! Deterministic per-ant RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each ant slot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (slot_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive slot indices uniformly across the seed space.
//! This means:
//!
//! - Ants never share RNG state (no contention, no ordering dependency), so
//!   traversals within a generation may run on worker threads unchanged.
//! - A run is fully reproducible from `ColonyConfig::seed`, whether the ant
//!   phase runs sequentially or in parallel.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AntRng ────────────────────────────────────────────────────────────────────

/// Per-ant deterministic RNG.
///
/// Create one per ant slot at colony init; store in a `Vec<AntRng>` held
/// beside the matrices so the generation phase can borrow `&mut [AntRng]`
/// alongside `&DistanceMatrix` and `&PheromoneMatrix` without conflict.
pub struct AntRng(SmallRng);

impl AntRng {
    /// Seed deterministically from the run's global seed and an ant slot.
    pub fn new(global_seed: u64, slot: u32) -> Self {
        let seed = global_seed ^ (slot as u64).wrapping_mul(MIXING_CONSTANT);
        AntRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn gen_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
