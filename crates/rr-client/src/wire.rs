//! JSON shapes exchanged with the routing backend.
//!
//! Every response field is optional here; presence is checked in
//! [`parse`][crate::parse] so a missing field becomes a typed error instead
//! of a serde message.

use serde::{Deserialize, Serialize};

/// Request body: free-text origin and destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub origin:      String,
    pub destination: String,
}

impl RouteQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self { origin: origin.into(), destination: destination.into() }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub routes:      Option<Vec<WireRoute>>,
    pub origin:      Option<WireLatLng>,
    pub destination: Option<WireLatLng>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRoute {
    pub coordinates:      Option<Vec<[f64; 2]>>,
    pub mean_utci:        Option<f64>,
    #[serde(default)]
    pub distance:         Option<String>,
    #[serde(default)]
    pub duration:         Option<String>,
    #[serde(default)]
    pub shade_percentage: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct WireErrorBody {
    pub error: Option<String>,
}
