//! Camera position and orientation.

use rr_core::GeoPoint;

/// Heading / pitch / roll in degrees.
///
/// Heading is clockwise from true north; negative pitch looks down.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    pub heading_deg: f64,
    pub pitch_deg:   f64,
    pub roll_deg:    f64,
}

/// Where the rendering layer should put its camera.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPose {
    pub position:    GeoPoint,
    /// Altitude above the ellipsoid, metres.
    pub altitude_m:  f64,
    pub orientation: Orientation,
}

impl CameraPose {
    /// Overview of downtown Austin, shown before any route set arrives.
    pub fn home() -> Self {
        Self {
            position:    GeoPoint::new(30.2672, -97.7431),
            altitude_m:  800.0,
            orientation: Orientation { heading_deg: 0.0, pitch_deg: -20.0, roll_deg: 0.0 },
        }
    }

    /// Heading and pitch in radians, for renderers that want them.
    pub fn heading_pitch_roll_rad(&self) -> (f64, f64, f64) {
        (
            self.orientation.heading_deg.to_radians(),
            self.orientation.pitch_deg.to_radians(),
            self.orientation.roll_deg.to_radians(),
        )
    }
}
