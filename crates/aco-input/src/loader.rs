//! CSV city loader.
//!
//! # CSV format
//!
//! One row per city, with a header.  IDs are assigned densely from row order
//! (the first data row becomes `CityId(0)`), which is what the matrices index
//! by.
//!
//! ```csv
//! name,latitude,longitude
//! Vienna,48.2082,16.3738
//! Berlin,52.5200,13.4050
//! Rome,41.9028,12.4964
//! ```
//!
//! Coordinates are decimal degrees; latitude must lie in [-90, 90] and
//! longitude in [-180, 180], both finite.  Duplicate coordinates are allowed
//! (two offices in one building are a legitimate instance) — the solver
//! handles the resulting zero-length edges.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use aco_core::{City, CityId};

use crate::{InputError, InputResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a city list from a CSV file.
///
/// Fails fast on the first malformed row or invalid coordinate, and on
/// instances with fewer than 2 cities.
pub fn load_cities_csv(path: &Path) -> InputResult<Vec<City>> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_cities_reader(file)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded city lists.
pub fn load_cities_reader<R: Read>(reader: R) -> InputResult<Vec<City>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cities: Vec<City> = Vec::new();

    for (row, result) in csv_reader.deserialize::<CityRecord>().enumerate() {
        let record = result.map_err(|e| InputError::Parse(e.to_string()))?;
        validate_coordinate(row, &record)?;

        // Row order is the ID space; u32 overflow would need 4 billion rows.
        let id = CityId(row as u32);
        cities.push(City::new(id, record.name, record.latitude, record.longitude));
    }

    if cities.len() < 2 {
        return Err(InputError::TooFewCities(cities.len()));
    }
    Ok(cities)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate_coordinate(row: usize, record: &CityRecord) -> InputResult<()> {
    let lat_ok = record.latitude.is_finite() && record.latitude.abs() <= 90.0;
    let lon_ok = record.longitude.is_finite() && record.longitude.abs() <= 180.0;
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(InputError::InvalidCoordinate {
            row,
            name: record.name.clone(),
            lat: record.latitude,
            lon: record.longitude,
        })
    }
}
