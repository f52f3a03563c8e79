//! Candidate route as returned by the routing backend.

use rr_core::{GeoPoint, RrError, RrResult};

/// One candidate route between the requested origin and destination.
///
/// Read-only inside the engine.  `distance` and `duration` are display
/// strings produced by the backend and are passed through untouched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Ordered path from origin to destination.
    pub path: Vec<GeoPoint>,

    /// Thermal-comfort index for the whole route (mean UTCI).
    pub comfort_score: f64,

    /// Human-readable distance, e.g. `"2.3 km"`.
    pub distance: String,

    /// Human-readable travel time, e.g. `"28 mins"`.
    pub duration: String,

    /// Share of the route in shade, in percent.
    pub shade_percentage: f64,
}

impl Route {
    /// Minimum number of path points for a drawable route.
    pub const MIN_POINTS: usize = 2;

    pub fn new(path: Vec<GeoPoint>, comfort_score: f64) -> Self {
        Self {
            path,
            comfort_score,
            distance: String::new(),
            duration: String::new(),
            shade_percentage: 0.0,
        }
    }

    /// Attach the display strings and shade share.
    pub fn with_summary(
        mut self,
        distance: impl Into<String>,
        duration: impl Into<String>,
        shade_percentage: f64,
    ) -> Self {
        self.distance = distance.into();
        self.duration = duration.into();
        self.shade_percentage = shade_percentage;
        self
    }

    /// First path point, if any.
    #[inline]
    pub fn start(&self) -> Option<GeoPoint> {
        self.path.first().copied()
    }

    /// Last path point, if any.
    #[inline]
    pub fn end(&self) -> Option<GeoPoint> {
        self.path.last().copied()
    }

    /// Check the route invariants: at least two points, every coordinate in
    /// range, finite comfort score.
    pub fn validate(&self) -> RrResult<()> {
        if self.path.len() < Self::MIN_POINTS {
            return Err(RrError::InvalidRoute { points: self.path.len() });
        }
        for p in &self.path {
            p.validate()?;
        }
        if !self.comfort_score.is_finite() {
            return Err(RrError::InvalidScore(self.comfort_score));
        }
        Ok(())
    }
}
