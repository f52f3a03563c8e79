//! Ground elevation lookup supplied by the rendering layer.

use rr_core::GeoPoint;

/// Terrain sampler.
///
/// `None` means "no data here" (tiles not loaded, outside coverage, the
/// sampler failed).  Callers treat it as sea level.
pub trait ElevationSource {
    fn elevation_at(&self, point: GeoPoint) -> Option<f64>;
}

/// Flat world: every lookup misses.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTerrain;

impl ElevationSource for NoTerrain {
    fn elevation_at(&self, _point: GeoPoint) -> Option<f64> {
        None
    }
}

impl<F> ElevationSource for F
where
    F: Fn(GeoPoint) -> Option<f64>,
{
    fn elevation_at(&self, point: GeoPoint) -> Option<f64> {
        self(point)
    }
}
