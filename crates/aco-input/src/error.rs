use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("city {row} ({name}) has an invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        row: usize,
        name: String,
        lat: f64,
        lon: f64,
    },

    #[error("a TSP instance needs at least 2 cities, got {0}")]
    TooFewCities(usize),
}

pub type InputResult<T> = Result<T, InputError>;
