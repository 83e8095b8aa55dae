//! `aco-colony` — the ant colony optimization loop.
//!
//! # Generation loop
//!
//! ```text
//! for iteration in 0..config.iterations:
//!   ① Ants      — ants_per_generation independent tour constructions
//!                 against the iteration-start pheromone snapshot
//!                 (parallel with the `parallel` feature).
//!   ② Rank      — sort the generation ascending by tour length.
//!   ③ Best      — adopt the generation's best on strict improvement only.
//!   ④ Evaporate — multiply every pheromone entry by evaporation_rate.
//!   ⑤ Reinforce — top half of the generation deposits scale/length on
//!                 each of its directed edges.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the ant phase on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aco_colony::{Colony, NoopObserver};
//! use aco_core::ColonyConfig;
//!
//! let mut colony = Colony::from_cities(&cities, ColonyConfig::default())?;
//! let best = colony.run(&mut NoopObserver);
//! println!("{:.1} km over {} cities", best.length_km, best.order.len());
//! ```

pub mod ant;
pub mod colony;
pub mod error;
pub mod observer;
pub mod sampling;

#[cfg(test)]
mod tests;

pub use ant::{construct_tour, Tour};
pub use colony::Colony;
pub use error::{ColonyError, ColonyResult};
pub use observer::{ColonyObserver, NoopObserver};
pub use sampling::sample_weighted;
