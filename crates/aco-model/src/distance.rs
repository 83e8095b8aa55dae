//! Immutable pairwise distance table.

use aco_core::City;

use crate::{ModelError, ModelResult};

/// Symmetric n×n table of haversine distances in kilometres.
///
/// Built once from the city list; read-only afterwards.  Invariants upheld by
/// construction:
///
/// - `get(i, j) == get(j, i)` for all i, j (each pair computed once and
///   mirrored, not recomputed),
/// - `get(i, i) == 0.0` exactly, regardless of floating-point noise in the
///   haversine,
/// - every entry is finite and non-negative.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n: usize,
    /// Row-major `n * n` entries.
    entries: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the matrix from a city list.  O(n²/2) haversine evaluations.
    ///
    /// Fails fast on degenerate instances (fewer than 2 cities) before
    /// allocating anything.
    pub fn build(cities: &[City]) -> ModelResult<DistanceMatrix> {
        let n = cities.len();
        if n < 2 {
            return Err(ModelError::TooFewCities(n));
        }

        let mut entries = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].point.distance_km(cities[j].point);
                entries[i * n + j] = d;
                entries[j * n + i] = d;
            }
        }
        Ok(DistanceMatrix { n, entries })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Distance in km between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.n + j]
    }

    /// Total cyclic length of a visiting order: the sum of consecutive edges
    /// plus the closing edge from the last city back to the first.
    ///
    /// `order` must be a permutation of `0..n` as `u32` indices; the colony
    /// only ever produces such orders.
    pub fn tour_length(&self, order: &[u32]) -> f64 {
        debug_assert_eq!(order.len(), self.n);

        let mut total = 0.0;
        for pair in order.windows(2) {
            total += self.get(pair[0] as usize, pair[1] as usize);
        }
        total + self.get(order[self.n - 1] as usize, order[0] as usize)
    }
}
