//! Unit tests for rr-camera.

use rr_core::GeoPoint;
use rr_route::{RankedRoute, Route, rank};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ranked_path(path: Vec<GeoPoint>) -> RankedRoute {
    rank(&[Route::new(path, 30.0)]).remove(0)
}

fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

// ── CameraPlacer ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod placer {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rr_core::RrError;
    use rr_core::geodesy::{bearing, distance_m};

    use super::*;
    use crate::{CameraPlacer, NoTerrain};

    #[test]
    fn northbound_route_camera_sits_south() {
        let start = GeoPoint::new(30.0, -97.0);
        let route = ranked_path(vec![start, GeoPoint::new(30.005, -97.0), GeoPoint::new(30.01, -97.0)]);
        let pose = CameraPlacer::default().place(&route, &NoTerrain).unwrap();

        assert!(angle_diff(pose.orientation.heading_deg, 0.0) < 1e-9);
        assert_eq!(pose.orientation.pitch_deg, -20.0);
        assert_eq!(pose.orientation.roll_deg, 0.0);
        assert_eq!(pose.altitude_m, 250.0);

        // 500 m of latitude ≈ 0.0044966°.
        assert!((pose.position.lat - (30.0 - 0.0044966)).abs() < 1e-6, "got {}", pose.position);
        assert!((pose.position.lon - -97.0).abs() < 1e-9);
    }

    #[test]
    fn heading_uses_first_and_last_points_only() {
        // A detour through the middle does not change the framing.
        let start = GeoPoint::new(30.0, -97.0);
        let end = GeoPoint::new(30.0, -96.99);
        let route = ranked_path(vec![start, GeoPoint::new(30.02, -97.05), end]);
        let pose = CameraPlacer::default().place(&route, &NoTerrain).unwrap();
        assert!((pose.orientation.heading_deg - bearing(start, end).unwrap()).abs() < 1e-12);
        assert!(angle_diff(pose.orientation.heading_deg, 90.0) < 0.01);
    }

    #[test]
    fn terrain_height_added() {
        let route = ranked_path(vec![GeoPoint::new(30.0, -97.0), GeoPoint::new(30.01, -97.0)]);
        let terrain = |_: GeoPoint| Some(149.5);
        let pose = CameraPlacer::default().place(&route, &terrain).unwrap();
        assert_eq!(pose.altitude_m, 399.5);
    }

    #[test]
    fn terrain_sampled_at_route_start() {
        let start = GeoPoint::new(30.0, -97.0);
        let route = ranked_path(vec![start, GeoPoint::new(30.01, -97.0)]);
        let terrain = move |p: GeoPoint| if p == start { Some(10.0) } else { Some(9_999.0) };
        let pose = CameraPlacer::default().place(&route, &terrain).unwrap();
        assert_eq!(pose.altitude_m, 260.0);
    }

    #[test]
    fn missing_or_bad_elevation_is_zero() {
        let route = ranked_path(vec![GeoPoint::new(30.0, -97.0), GeoPoint::new(30.01, -97.0)]);
        let nan = |_: GeoPoint| Some(f64::NAN);
        assert_eq!(CameraPlacer::default().place(&route, &nan).unwrap().altitude_m, 250.0);
        let none = |_: GeoPoint| -> Option<f64> { None };
        assert_eq!(CameraPlacer::default().place(&route, &none).unwrap().altitude_m, 250.0);
    }

    #[test]
    fn back_off_distance_and_direction_randomized() {
        let mut rng = SmallRng::seed_from_u64(3);
        let placer = CameraPlacer::default();
        for _ in 0..200 {
            let start = GeoPoint::new(rng.gen_range(-60.0..60.0), rng.gen_range(-170.0..170.0));
            let end = GeoPoint::new(
                start.lat + rng.gen_range(-0.05..0.05),
                start.lon + rng.gen_range(-0.05..0.05),
            );
            if start == end {
                continue;
            }
            let route = ranked_path(vec![start, end]);
            let pose = placer.place(&route, &NoTerrain).unwrap();

            let d = distance_m(start, pose.position).unwrap();
            assert!((d - 500.0).abs() < 1e-6, "distance {d}");
            // Looking from the camera back to the start is the route heading.
            let look = bearing(pose.position, start).unwrap();
            assert!(angle_diff(look, pose.orientation.heading_deg) < 0.02, "look {look}");
        }
    }

    #[test]
    fn closed_loop_route_does_not_fail() {
        let p = GeoPoint::new(30.0, -97.0);
        let route = ranked_path(vec![p, GeoPoint::new(30.01, -97.0), p]);
        let pose = CameraPlacer::default().place(&route, &NoTerrain).unwrap();
        assert_eq!(pose.orientation.heading_deg, 0.0);
    }

    #[test]
    fn short_route_rejected() {
        let route = ranked_path(vec![GeoPoint::new(30.0, -97.0)]);
        assert_eq!(
            CameraPlacer::default().place(&route, &NoTerrain),
            Err(RrError::InvalidRoute { points: 1 })
        );
    }

    #[test]
    fn invalid_coordinate_rejected() {
        let route = ranked_path(vec![GeoPoint::new(30.0, -97.0), GeoPoint::new(91.0, -97.0)]);
        assert!(matches!(
            CameraPlacer::default().place(&route, &NoTerrain),
            Err(RrError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn custom_framing() {
        let placer = CameraPlacer { back_off_m: 0.0, height_above_ground_m: 1_000.0, pitch_deg: -45.0 };
        let start = GeoPoint::new(30.0, -97.0);
        let route = ranked_path(vec![start, GeoPoint::new(30.01, -97.0)]);
        let pose = placer.place(&route, &NoTerrain).unwrap();
        assert_eq!(pose.position, start);
        assert_eq!(pose.altitude_m, 1_000.0);
        assert_eq!(pose.orientation.pitch_deg, -45.0);
    }
}

// ── CameraPose ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pose {
    use crate::CameraPose;

    #[test]
    fn home_view() {
        let home = CameraPose::home();
        assert_eq!(home.position.lat, 30.2672);
        assert_eq!(home.position.lon, -97.7431);
        assert_eq!(home.altitude_m, 800.0);
        assert_eq!(home.orientation.heading_deg, 0.0);
        assert_eq!(home.orientation.pitch_deg, -20.0);
    }

    #[test]
    fn radians() {
        let (h, p, r) = CameraPose::home().heading_pitch_roll_rad();
        assert_eq!(h, 0.0);
        assert!((p - (-20.0f64).to_radians()).abs() < 1e-15);
        assert_eq!(r, 0.0);
    }
}
