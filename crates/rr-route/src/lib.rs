//! `rr-route` — candidate routes and their comfort ranking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`route`]   | `Route` (external input) and its validation                |
//! | [`rank`]    | `rank`, `RankedRoute`, `label_for_rank`                    |
//! | [`palette`] | `RouteColor`, `ROUTE_PALETTE`, `color_for_rank`            |
//!
//! # Ordering convention
//!
//! Routes are sorted by comfort score **descending**, so rank 0 carries the
//! highest score.  Labels are positional: the three top ranks are
//! "Coolest", "Cooler", "Warm"; everything after is "Route N".

pub mod palette;
pub mod rank;
pub mod route;


pub use palette::{ROUTE_PALETTE, RouteColor, color_for_rank};
pub use rank::{RankedRoute, label_for_rank, rank};
pub use route::Route;
