//! Back-off camera placement.

use rr_core::geodesy::{bearing, destination_point, normalize_degrees};
use rr_core::{RrError, RrResult};
use rr_route::RankedRoute;
use tracing::debug;

use crate::{CameraPose, ElevationSource, Orientation};

/// Computes the initial camera pose from the top-ranked route.
///
/// The three distances/angles are public so an application can tune them
/// from its config file; [`Default`] gives the standard framing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraPlacer {
    /// How far behind the route start the camera sits, metres.
    pub back_off_m: f64,
    /// Height above the ground at the route start, metres.
    pub height_above_ground_m: f64,
    /// Downward tilt, degrees (negative looks down).
    pub pitch_deg: f64,
}

impl Default for CameraPlacer {
    fn default() -> Self {
        Self {
            back_off_m:            500.0,
            height_above_ground_m: 250.0,
            pitch_deg:             -20.0,
        }
    }
}

impl CameraPlacer {
    /// Pose looking along `route0` from behind its first point.
    ///
    /// `route0` must have at least two points.  A missing or non-finite
    /// elevation at the start is taken as 0.
    pub fn place<T: ElevationSource + ?Sized>(
        &self,
        route0:  &RankedRoute,
        terrain: &T,
    ) -> RrResult<CameraPose> {
        let path = route0.path();
        let (first, last) = match path {
            [first, .., last] => (*first, *last),
            _ => return Err(RrError::InvalidRoute { points: path.len() }),
        };

        let heading = bearing(first, last)?;
        let behind = normalize_degrees(heading + 180.0);
        let position = destination_point(first, behind, self.back_off_m)?;

        let ground = terrain
            .elevation_at(first)
            .filter(|h| h.is_finite())
            .unwrap_or(0.0);

        debug!(
            rank = route0.rank,
            heading,
            ground,
            position = %position,
            "camera placed"
        );

        Ok(CameraPose {
            position,
            altitude_m:  ground + self.height_above_ground_m,
            orientation: Orientation {
                heading_deg: heading,
                pitch_deg:   self.pitch_deg,
                roll_deg:    0.0,
            },
        })
    }
}
