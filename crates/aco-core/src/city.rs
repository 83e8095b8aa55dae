//! City identifier and record types.
//!
//! `CityId` is a zero-cost `u32` wrapper.  IDs are assigned densely from row
//! order at load time (0..n-1), so `id.index()` indexes directly into the
//! city list and both matrices.

use std::fmt;

use crate::GeoPoint;

// ── CityId ────────────────────────────────────────────────────────────────────

/// Dense, stable city identifier in `0..n`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub u32);

impl CityId {
    /// Cast to `usize` for direct use as a matrix/`Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for CityId {
    type Error = std::num::TryFromIntError;

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        Ok(CityId(u32::try_from(v)?))
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

// ── City ──────────────────────────────────────────────────────────────────────

/// One city of the problem instance.  Immutable after load; owned exclusively
/// by the city list passed to the distance-matrix builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub point: GeoPoint,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            point: GeoPoint::new(lat, lon),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id.0, self.name, self.point)
    }
}
