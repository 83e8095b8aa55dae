//! Mutable pheromone trail intensities.

/// n×n table of directed-edge pheromone intensities.
///
/// Initialized uniformly to `1/n`.  Mutated only between generations:
/// `evaporate` first (uniform multiplicative decay on every directed edge),
/// then `reinforce` for each elite tour.  Reinforcement is directional —
/// a tour deposits on `from→to` only, not the mirror — so the matrix is not
/// required to stay symmetric.
///
/// Invariant: every entry stays strictly positive.  Evaporation multiplies by
/// a rate inside (0, 1) and reinforcement only adds, so no sequence of calls
/// can drive an entry to zero or below.
#[derive(Clone, Debug)]
pub struct PheromoneMatrix {
    n: usize,
    /// Row-major `n * n` entries.
    entries: Vec<f64>,
}

impl PheromoneMatrix {
    /// Uniform initialization at `1/n`.
    pub fn new(n: usize) -> Self {
        let init = 1.0 / n as f64;
        PheromoneMatrix { n, entries: vec![init; n * n] }
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Intensity on the directed edge `i → j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.n + j]
    }

    /// Multiply every entry by `rate`.  Called once per iteration, before
    /// reinforcement.
    pub fn evaporate(&mut self, rate: f64) {
        for v in &mut self.entries {
            *v *= rate;
        }
    }

    /// Deposit `amount` on each directed edge of a visiting order, including
    /// the wrap-around edge from the last city back to the first.
    pub fn reinforce(&mut self, order: &[u32], amount: f64) {
        debug_assert_eq!(order.len(), self.n);

        for pair in order.windows(2) {
            self.entries[pair[0] as usize * self.n + pair[1] as usize] += amount;
        }
        self.entries[order[self.n - 1] as usize * self.n + order[0] as usize] += amount;
    }
}
