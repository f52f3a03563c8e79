//! `rr-core` — foundational types for the `route_reveal` engine.
//!
//! Every other `rr-*` crate depends on this one.  It has no `rr-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoPoint` (f64 degrees) and coordinate validation      |
//! | [`geodesy`]   | `bearing`, `destination_point`, `distance_m`            |
//! | [`time`]      | `Timestamp`, `Clock`, `SystemClock`, `ManualClock`      |
//! | [`config`]    | `ScheduleConfig` (duration / gap / scroll delay)        |
//! | [`ids`]       | `RunId` generation counter                              |
//! | [`error`]     | `RrError`, `RrResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod geodesy;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScheduleConfig;
pub use error::{RrError, RrResult};
pub use geo::GeoPoint;
pub use ids::RunId;
pub use time::{Clock, ManualClock, SystemClock, Timestamp};
