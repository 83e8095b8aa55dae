//! Colony tuning parameters.
//!
//! All knobs of the optimizer live in one struct passed at construction; the
//! solver itself has no hidden constants.  `Default` carries the reference
//! tuning, which converges quickly on instances of a few thousand cities.

use crate::{AcoError, AcoResult};

/// Tuning parameters for one optimization run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Pheromone influence exponent.  Values below 1 weight trail strength
    /// sub-linearly, keeping exploration alive.
    pub alpha: f64,

    /// Distance penalty exponent.  Large values strongly prefer short edges.
    pub beta: f64,

    /// Per-iteration multiplicative pheromone decay, strictly inside (0, 1).
    pub evaporation_rate: f64,

    /// Reinforcement scale: each elite tour deposits `scale / tour_length`
    /// on its edges, so shorter tours deposit more.
    pub reinforcement_scale: f64,

    /// Number of generations to run.
    pub iterations: u32,

    /// Ants per generation.  The best half (rounded down) reinforces.
    pub ants_per_generation: u32,

    /// Master RNG seed.  The same seed always produces identical tours.
    pub seed: u64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            beta: 5.0,
            evaporation_rate: 0.9,
            reinforcement_scale: 100.0,
            iterations: 10,
            ants_per_generation: 16,
            seed: 42,
        }
    }
}

impl ColonyConfig {
    /// Fail-fast validation, called by the optimizer before any work.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(AcoError::Config(format!(
                "alpha ({}) and beta ({}) must be finite",
                self.alpha, self.beta
            )));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(AcoError::Config(format!(
                "evaporation_rate must be in (0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !(self.reinforcement_scale > 0.0) || !self.reinforcement_scale.is_finite() {
            return Err(AcoError::Config(format!(
                "reinforcement_scale must be positive and finite, got {}",
                self.reinforcement_scale
            )));
        }
        if self.iterations == 0 {
            return Err(AcoError::Config("iterations must be at least 1".into()));
        }
        if self.ants_per_generation < 2 {
            return Err(AcoError::Config(format!(
                "ants_per_generation must be at least 2, got {}",
                self.ants_per_generation
            )));
        }
        Ok(())
    }

    /// Size of the elite set that reinforces each iteration.
    ///
    /// Half the generation, rounded down, never below 1 (validation
    /// guarantees at least 2 ants).
    #[inline]
    pub fn elite_count(&self) -> usize {
        (self.ants_per_generation as usize / 2).max(1)
    }
}
