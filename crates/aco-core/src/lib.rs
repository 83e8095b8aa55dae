//! `aco-core` — foundational types for the `rust_aco` TSP solver.
//!
//! This crate is a dependency of every other `aco-*` crate.  It intentionally
//! has no `aco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`city`]     | `CityId`, `City`                                   |
//! | [`geo`]      | `GeoPoint`, haversine distance                     |
//! | [`config`]   | `ColonyConfig` tuning parameters                   |
//! | [`rng`]      | `AntRng` (per-ant deterministic RNG)               |
//! | [`error`]    | `AcoError`, `AcoResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod city;
pub mod config;
pub mod error;
pub mod geo;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::{City, CityId};
pub use config::ColonyConfig;
pub use error::{AcoError, AcoResult};
pub use geo::GeoPoint;
pub use rng::AntRng;
