//! Single-ant stochastic tour construction.

use aco_core::{AntRng, CityId, ColonyConfig};
use aco_model::{DistanceMatrix, PheromoneMatrix};

use crate::sampling::sample_weighted;

/// Floor applied to distances before exponentiation and to tour lengths
/// before division.  Duplicate-coordinate cities produce zero-length edges;
/// flooring at one millimetre keeps desirability scores and reinforcement
/// amounts large but finite.
pub const MIN_EDGE_KM: f64 = 1e-6;

// ── Tour ──────────────────────────────────────────────────────────────────────

/// One completed tour: a permutation of all city indices plus its total
/// cyclic length (the closing edge back to the start included).
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Visiting order as dense city indices.
    pub order: Vec<u32>,
    /// Total cyclic length in kilometres.
    pub length_km: f64,
}

impl Tour {
    /// The visiting order as typed [`CityId`]s.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.order.iter().map(|&i| CityId(i))
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

/// Construct one complete tour.
///
/// Starts at a uniformly random city, then repeatedly picks the next city by
/// roulette-wheel sampling over desirability scores
///
///   pheromone[current][j]^alpha / distance[current][j]^beta
///
/// across the unvisited candidates.  Selection stays genuinely stochastic —
/// never a greedy argmax — so the colony keeps exploring.  An all-zero score
/// vector degrades to a uniform choice inside [`sample_weighted`].
///
/// The only state read is the two matrices (immutable here) and the ant's own
/// RNG, so any number of ants may run concurrently within a generation.
pub fn construct_tour(
    distances: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    config: &ColonyConfig,
    rng: &mut AntRng,
) -> Tour {
    let n = distances.len();
    debug_assert_eq!(n, pheromones.len());

    let mut order: Vec<u32> = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    let mut current = rng.gen_range(0..n);
    visited[current] = true;
    order.push(current as u32);

    // Candidate / weight scratch space, reused across steps.
    let mut candidates: Vec<usize> = Vec::with_capacity(n - 1);
    let mut weights: Vec<f64> = Vec::with_capacity(n - 1);

    while order.len() < n {
        candidates.clear();
        weights.clear();

        for j in 0..n {
            if visited[j] {
                continue;
            }
            let trail = pheromones.get(current, j);
            let dist = distances.get(current, j).max(MIN_EDGE_KM);
            candidates.push(j);
            weights.push(trail.powf(config.alpha) / dist.powf(config.beta));
        }

        // `None` only for an empty candidate set, which cannot happen while
        // the tour is incomplete.
        let pick = sample_weighted(&weights, rng).unwrap_or(0);
        let next = candidates[pick];

        visited[next] = true;
        order.push(next as u32);
        current = next;
    }

    let length_km = distances.tour_length(&order);
    Tour { order, length_km }
}
