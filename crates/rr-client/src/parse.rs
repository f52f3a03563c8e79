//! Validation of backend payloads into engine types.

use rr_core::GeoPoint;
use rr_route::Route;
use tracing::debug;

use crate::wire::{WireErrorBody, WireLatLng, WireResponse, WireRoute};
use crate::{ClientError, ClientResult};

/// A validated backend answer: the candidate routes in the order the backend
/// sent them, plus the geocoded endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSet {
    pub routes:      Vec<Route>,
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
}

/// Parse and validate a successful (2xx) response body.
///
/// Checks run in this order: [`ClientError::EmptyResult`] when `routes` is
/// missing or empty, then [`ClientError::MissingEndpoint`] or
/// [`ClientError::InvalidCoordinate`] for the origin and destination, then
/// the routes themselves.  Anything that does not match the expected shape
/// is [`ClientError::Malformed`].
pub fn parse_response(body: &[u8]) -> ClientResult<RouteSet> {
    let wire: WireResponse =
        serde_json::from_slice(body).map_err(|e| ClientError::Malformed(e.to_string()))?;

    let wire_routes = wire.routes.unwrap_or_default();
    if wire_routes.is_empty() {
        return Err(ClientError::EmptyResult);
    }

    let origin = endpoint("origin", wire.origin)?;
    let destination = endpoint("destination", wire.destination)?;

    let routes = wire_routes
        .into_iter()
        .enumerate()
        .map(|(index, r)| route(index, r))
        .collect::<ClientResult<Vec<_>>>()?;

    debug!(routes = routes.len(), %origin, %destination, "routing response parsed");
    Ok(RouteSet { routes, origin, destination })
}

/// Extract the backend's `{"error": "..."}` message from a failure body.
///
/// Falls back to the trimmed body text when it is not that shape; returns an
/// empty string for an empty body.
pub fn parse_error_body(body: &[u8]) -> String {
    match serde_json::from_slice::<WireErrorBody>(body) {
        Ok(WireErrorBody { error: Some(msg) }) => msg,
        Ok(WireErrorBody { error: None }) => String::new(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}

fn endpoint(name: &'static str, raw: Option<WireLatLng>) -> ClientResult<GeoPoint> {
    match raw {
        Some(WireLatLng { lat: Some(lat), lng: Some(lng) }) => Ok(GeoPoint::new(lat, lng).validate()?),
        _ => Err(ClientError::MissingEndpoint(name)),
    }
}

fn route(index: usize, raw: WireRoute) -> ClientResult<Route> {
    let coordinates = raw
        .coordinates
        .ok_or_else(|| ClientError::Malformed(format!("route {index} has no coordinates")))?;
    if coordinates.len() < Route::MIN_POINTS {
        return Err(ClientError::Malformed(format!(
            "route {index} has {} point(s), at least {} are required",
            coordinates.len(),
            Route::MIN_POINTS
        )));
    }
    let comfort_score = raw
        .mean_utci
        .ok_or_else(|| ClientError::Malformed(format!("route {index} has no mean_utci")))?;

    let path = coordinates
        .into_iter()
        .map(GeoPoint::from_lat_lng)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(path, comfort_score).with_summary(
        raw.distance.unwrap_or_default(),
        raw.duration.unwrap_or_default(),
        raw.shade_percentage.unwrap_or(0.0),
    ))
}
