//! Geographic coordinate type.
//!
//! `GeoPoint` is double precision throughout.  The camera back-off is a few
//! hundred metres from the route start, and the round trip through
//! `destination_point` / `bearing` must stay well inside a hundredth of a
//! degree, so single precision is not enough here.

use std::fmt;

use crate::{RrError, RrResult};

/// A WGS-84 geographic coordinate in degrees.
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

    /// `true` if both components are finite and inside their valid ranges.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Return `self` unchanged, or [`RrError::InvalidCoordinate`].
    pub fn validate(self) -> RrResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(RrError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }

    /// Build from a `[lat, lng]` pair as the routing backend sends it.
    pub fn from_lat_lng(pair: [f64; 2]) -> RrResult<Self> {
        GeoPoint::new(pair[0], pair[1]).validate()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
