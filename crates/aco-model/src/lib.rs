//! `aco-model` — the two matrices at the heart of the solver.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`distance`]  | `DistanceMatrix` — immutable pairwise haversine table |
//! | [`pheromone`] | `PheromoneMatrix` — mutable trail intensities         |
//!
//! `DistanceMatrix` is built once and only ever read; `PheromoneMatrix` is
//! mutated strictly between generations (`evaporate` then `reinforce`).  Both
//! are flat row-major `Vec<f64>`s: no pointer chasing in the inner scoring
//! loop, and `n` stays small enough (tens of thousands) that n² doubles fit
//! comfortably in memory.

pub mod distance;
pub mod error;
pub mod pheromone;


pub use distance::DistanceMatrix;
pub use error::{ModelError, ModelResult};
pub use pheromone::PheromoneMatrix;
