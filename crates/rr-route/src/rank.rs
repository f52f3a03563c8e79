//! Comfort ranking and positional labels.

use std::borrow::Cow;
use std::cmp::Ordering;

use rr_core::GeoPoint;

use crate::{Route, RouteColor, color_for_rank};

/// A [`Route`] with its position in the comfort ordering.
///
/// Created once per incoming route set by [`rank`]; immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedRoute {
    pub route: Route,
    /// 0-based position in order of decreasing comfort score.
    pub rank: usize,
    pub label: Cow<'static, str>,
    pub color: RouteColor,
}

impl RankedRoute {
    #[inline]
    pub fn path(&self) -> &[GeoPoint] {
        &self.route.path
    }

    #[inline]
    pub fn comfort_score(&self) -> f64 {
        self.route.comfort_score
    }
}

/// Display label for a rank: "Coolest", "Cooler", "Warm", then "Route N"
/// (1-based) from the fourth route on.
pub fn label_for_rank(rank: usize) -> Cow<'static, str> {
    match rank {
        0 => Cow::Borrowed("Coolest"),
        1 => Cow::Borrowed("Cooler"),
        2 => Cow::Borrowed("Warm"),
        n => Cow::Owned(format!("Route {}", n + 1)),
    }
}

/// Order `routes` by comfort score, highest first, and label them.
///
/// The sort is stable: routes with equal scores keep their input order.
/// `routes` is not modified.
pub fn rank(routes: &[Route]) -> Vec<RankedRoute> {
    let mut order: Vec<&Route> = routes.iter().collect();
    // Scores are finite once validated; `-0.0` and `0.0` compare equal.
    order.sort_by(|a, b| b.comfort_score.partial_cmp(&a.comfort_score).unwrap_or(Ordering::Equal));

    order
        .into_iter()
        .enumerate()
        .map(|(rank, route)| RankedRoute {
            route: route.clone(),
            rank,
            label: label_for_rank(rank),
            color: color_for_rank(rank),
        })
        .collect()
}
