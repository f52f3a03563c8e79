//! Per-tick output consumed by the rendering layer.

use std::borrow::Cow;

use rr_core::{GeoPoint, RunId, Timestamp};
use rr_route::{RankedRoute, RouteColor};

use crate::RevealPhase;

/// One row of the route summary side list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SidebarEntry {
    pub rank:             usize,
    pub label:            Cow<'static, str>,
    pub comfort_score:    f64,
    pub distance:         String,
    pub duration:         String,
    pub shade_percentage: f64,
    pub color:            RouteColor,
    /// Tick time at which the route started revealing.
    pub revealed_at:      Timestamp,
}

impl SidebarEntry {
    pub fn from_route(route: &RankedRoute, revealed_at: Timestamp) -> Self {
        Self {
            rank:             route.rank,
            label:            route.label.clone(),
            comfort_score:    route.route.comfort_score,
            distance:         route.route.distance.clone(),
            duration:         route.route.duration.clone(),
            shade_percentage: route.route.shade_percentage,
            color:            route.color,
            revealed_at,
        }
    }
}

/// Which end of a route a marker sits on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    Start,
    End,
}

/// Start or end pin for a route that has begun revealing.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub route_index: usize,
    pub kind:        MarkerKind,
    pub position:    GeoPoint,
}

/// Reveal state of one route at one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteFrame<'a> {
    /// Rank of the route; also its index in the run.
    pub route_index:    usize,
    pub label:          &'a str,
    pub phase:          RevealPhase,
    pub progress:       f64,
    /// Leading points of the path that should be drawn now.
    pub visible_prefix: &'a [GeoPoint],
    pub color:          RouteColor,
}

/// Everything the rendering layer needs for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealFrame<'a> {
    pub run:     RunId,
    /// The `now` of the tick that produced this frame, if any.
    pub now:     Option<Timestamp>,
    /// One entry per route, in rank order.
    pub routes:  Vec<RouteFrame<'a>>,
    pub markers: Vec<Marker>,
    /// Cumulative side list, in rank order.
    pub sidebar: &'a [SidebarEntry],
}

impl RevealFrame<'_> {
    /// Total points drawn across all routes.
    pub fn visible_points(&self) -> usize {
        self.routes.iter().map(|r| r.visible_prefix.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
