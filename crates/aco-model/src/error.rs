use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("a TSP instance needs at least 2 cities, got {0}")]
    TooFewCities(usize),
}

pub type ModelResult<T> = Result<T, ModelError>;
