//! Great-circle navigation on a spherical Earth.
//!
//! All three functions are pure and work in `f64`.  Inputs outside the valid
//! latitude/longitude ranges are rejected with
//! [`RrError::InvalidCoordinate`][crate::RrError::InvalidCoordinate] rather
//! than producing a silently wrapped answer.

use crate::{GeoPoint, RrResult};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Initial bearing of the great-circle path from `from` to `to`, in degrees
/// clockwise from true north, normalized to `[0, 360)`.
///
/// Bearing is angle-only, so no radius is involved.  Identical points have no
/// defined bearing; `0.0` is returned.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> RrResult<f64> {
    let from = from.validate()?;
    let to = to.validate()?;
    if from == to {
        return Ok(0.0);
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    Ok(normalize_degrees(y.atan2(x).to_degrees()))
}

/// Point reached by travelling `distance_m` metres from `origin` along the
/// great circle that starts at `bearing_deg`.
///
/// A zero distance returns `origin` unchanged.  The result's longitude is
/// normalized to `[-180, 180)`.
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> RrResult<GeoPoint> {
    let origin = origin.validate()?;
    if distance_m == 0.0 {
        return Ok(origin);
    }

    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    // Non-finite bearing or distance surfaces here as an invalid result.
    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees())).validate()
}

/// Haversine great-circle distance in metres.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> RrResult<f64> {
    let a = a.validate()?;
    let b = b.validate()?;

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    Ok(EARTH_RADIUS_M * c)
}

/// Wrap any angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap a longitude into `[-180, 180)`.
#[inline]
fn normalize_longitude(lon: f64) -> f64 {
    normalize_degrees(lon + 180.0) - 180.0
}
