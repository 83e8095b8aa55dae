//! `aco-input` — CSV city loading.
//!
//! The optimizer core treats the city source as an external collaborator; this
//! crate is the one implementation shipped with the workspace.  Validation is
//! fail-fast: a malformed row, an out-of-range coordinate, or an instance of
//! fewer than 2 cities is rejected before any matrix is built.

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{load_cities_csv, load_cities_reader};
