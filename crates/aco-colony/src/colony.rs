//! The `Colony` struct and its generation loop.

use aco_core::{AntRng, City, ColonyConfig};
use aco_model::{DistanceMatrix, PheromoneMatrix};

use crate::ant::{construct_tour, Tour, MIN_EDGE_KM};
use crate::{ColonyObserver, ColonyResult};

/// The colony optimizer.
///
/// Owns the immutable [`DistanceMatrix`], the mutable [`PheromoneMatrix`],
/// and one deterministic RNG per ant slot.  Pheromone mutation happens only
/// between generations; during the ant phase both matrices are borrowed
/// shared, which is what allows the `parallel` feature to fan the ants out
/// over Rayon workers with no synchronization.
///
/// Create via [`Colony::new`] or [`Colony::from_cities`], then call
/// [`Colony::run`].
pub struct Colony {
    config: ColonyConfig,
    distances: DistanceMatrix,
    pheromones: PheromoneMatrix,
    /// One RNG per ant slot, held beside the matrices for the split-borrow
    /// pattern in the ant phase (`&mut rngs` + `&distances` + `&pheromones`).
    rngs: Vec<AntRng>,
    /// Best tour across all iterations so far.  `None` until the first
    /// generation completes; its length is non-increasing afterwards.
    best: Option<Tour>,
}

impl Colony {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a colony over a pre-built distance matrix.
    ///
    /// Fails fast on an invalid configuration; the matrix builder has
    /// already rejected degenerate instances.
    pub fn new(distances: DistanceMatrix, config: ColonyConfig) -> ColonyResult<Colony> {
        config.validate()?;

        let n = distances.len();
        let rngs = (0..config.ants_per_generation)
            .map(|slot| AntRng::new(config.seed, slot))
            .collect();

        Ok(Colony {
            pheromones: PheromoneMatrix::new(n),
            distances,
            rngs,
            config,
            best: None,
        })
    }

    /// Convenience: build the distance matrix from a city list first.
    pub fn from_cities(cities: &[City], config: ColonyConfig) -> ColonyResult<Colony> {
        let distances = DistanceMatrix::build(cities)?;
        Colony::new(distances, config)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The distance matrix this colony searches over.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Current pheromone state.  Mainly useful for tests and diagnostics.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// The best tour seen so far, if at least one generation has run.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    // ── The run loop ──────────────────────────────────────────────────────

    /// Run `config.iterations` generations and return the best tour found.
    ///
    /// Calls observer hooks at every generation boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: ColonyObserver>(&mut self, observer: &mut O) -> Tour {
        for iteration in 0..self.config.iterations {
            observer.on_iteration_start(iteration);
            let generation = self.run_generation(iteration, observer);
            observer.on_iteration_end(iteration, &generation);
        }

        let best = self
            .best
            .clone()
            .unwrap_or_else(|| Tour { order: vec![], length_km: f64::INFINITY });
        observer.on_run_end(&best);
        best
    }

    /// One full iteration: ants, ranking, best tracking, pheromone update.
    /// Returns the generation sorted ascending by length.
    fn run_generation<O: ColonyObserver>(
        &mut self,
        iteration: u32,
        observer: &mut O,
    ) -> Vec<Tour> {
        // ── Phase 1: ant traversals ───────────────────────────────────────
        //
        // Each ant sees the iteration-start pheromone snapshot (shared
        // borrow) and owns its RNG slot exclusively.
        let mut generation = self.construct_generation();

        // ── Phase 2: rank by length ───────────────────────────────────────
        //
        // Stable sort with total_cmp: ties keep generation order, and the
        // comparison is total even if a non-finite length ever appeared.
        generation.sort_by(|a, b| a.length_km.total_cmp(&b.length_km));

        // ── Phase 3: adopt the generation best on strict improvement ──────
        let gen_best = &generation[0];
        let improved = match &self.best {
            None => true,
            Some(best) => gen_best.length_km < best.length_km,
        };
        if improved {
            self.best = Some(gen_best.clone());
            observer.on_new_best(iteration, gen_best);
        }

        // ── Phase 4: evaporation ──────────────────────────────────────────
        self.pheromones.evaporate(self.config.evaporation_rate);

        // ── Phase 5: elitist reinforcement ────────────────────────────────
        //
        // Only the top half deposits; the bottom half explored and is
        // discarded.  Length is floored so a degenerate all-duplicate
        // instance cannot divide by zero.
        for tour in &generation[..self.config.elite_count()] {
            let amount = self.config.reinforcement_scale / tour.length_km.max(MIN_EDGE_KM);
            self.pheromones.reinforce(&tour.order, amount);
        }

        generation
    }

    /// The ant phase: one tour per RNG slot.
    #[cfg(not(feature = "parallel"))]
    fn construct_generation(&mut self) -> Vec<Tour> {
        let distances = &self.distances;
        let pheromones = &self.pheromones;
        let config = &self.config;

        self.rngs
            .iter_mut()
            .map(|rng| construct_tour(distances, pheromones, config, rng))
            .collect()
    }

    /// The ant phase on Rayon's thread pool.  Per-slot RNGs make the result
    /// identical to the sequential build for the same seed.
    #[cfg(feature = "parallel")]
    fn construct_generation(&mut self) -> Vec<Tour> {
        use rayon::prelude::*;

        let distances = &self.distances;
        let pheromones = &self.pheromones;
        let config = &self.config;

        self.rngs
            .par_iter_mut()
            .map(|rng| construct_tour(distances, pheromones, config, rng))
            .collect()
    }
}
