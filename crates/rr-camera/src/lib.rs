//! `rr-camera` — one-shot camera pose for the start of a reveal run.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`pose`]    | `CameraPose`, `Orientation`                             |
//! | [`terrain`] | `ElevationSource` trait, `NoTerrain`                    |
//! | [`placer`]  | `CameraPlacer`                                          |
//!
//! # Placement
//!
//! ```text
//! bearing  = bearing(first, last)                 route 0's overall heading
//! back_off = destination(first, bearing + 180°, 500 m)
//! pose     = back_off @ ground(first) + 250 m, heading = bearing, pitch = −20°
//! ```
//!
//! The camera sits behind the start and looks along the route, so the first
//! route draws away from the viewer.

pub mod placer;
pub mod pose;
pub mod terrain;

#[cfg(test)]
mod tests;

pub use placer::CameraPlacer;
pub use pose::{CameraPose, Orientation};
pub use terrain::{ElevationSource, NoTerrain};
