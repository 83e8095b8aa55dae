//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Tour lengths
//! accumulate hundreds of edges and the pheromone update divides by them, so
//! the halved memory of `f32` is not worth the rounding noise here.

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres, on a sphere of mean
    /// Earth radius 6 371 km.
    ///
    /// Pure and total for finite inputs: always a finite, non-negative value.
    /// Coordinate validation happens at load time, not here.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R_KM: f64 = 6_371.0; // mean Earth radius

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
