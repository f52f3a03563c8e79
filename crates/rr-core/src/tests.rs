//! Unit tests for rr-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, RrError};

    #[test]
    fn valid_ranges() {
        assert!(GeoPoint::new(30.2672, -97.7431).is_valid());
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn validate_reports_coordinate() {
        let err = GeoPoint::new(100.0, 5.0).validate().unwrap_err();
        assert_eq!(err, RrError::InvalidCoordinate { lat: 100.0, lon: 5.0 });
    }

    #[test]
    fn from_lat_lng_order() {
        let p = GeoPoint::from_lat_lng([30.28, -97.73]).unwrap();
        assert_eq!(p.lat, 30.28);
        assert_eq!(p.lon, -97.73);
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod geodesy {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::geodesy::{bearing, destination_point, distance_m, normalize_degrees};
    use crate::{GeoPoint, RrError};

    /// Smallest angle between two bearings, in degrees.
    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn cardinal_bearings() {
        let o = GeoPoint::new(0.0, 0.0);
        assert!(angle_diff(bearing(o, GeoPoint::new(1.0, 0.0)).unwrap(), 0.0) < 1e-9);
        assert!(angle_diff(bearing(o, GeoPoint::new(0.0, 1.0)).unwrap(), 90.0) < 1e-9);
        assert!(angle_diff(bearing(o, GeoPoint::new(-1.0, 0.0)).unwrap(), 180.0) < 1e-9);
        assert!(angle_diff(bearing(o, GeoPoint::new(0.0, -1.0)).unwrap(), 270.0) < 1e-9);
    }

    #[test]
    fn bearing_in_range() {
        let o = GeoPoint::new(30.2672, -97.7431);
        let b = bearing(o, GeoPoint::new(30.2500, -97.7500)).unwrap();
        assert!((0.0..360.0).contains(&b), "got {b}");
    }

    #[test]
    fn bearing_same_point_is_zero() {
        let p = GeoPoint::new(30.2672, -97.7431);
        assert_eq!(bearing(p, p).unwrap(), 0.0);
    }

    #[test]
    fn bearing_rejects_invalid_input() {
        let bad = GeoPoint::new(0.0, 200.0);
        let ok = GeoPoint::new(0.0, 0.0);
        assert!(matches!(bearing(bad, ok), Err(RrError::InvalidCoordinate { .. })));
        assert!(matches!(bearing(ok, bad), Err(RrError::InvalidCoordinate { .. })));
    }

    #[test]
    fn zero_distance_returns_origin() {
        let p = GeoPoint::new(30.2672, -97.7431);
        for b in [0.0, 45.0, 90.0, 180.0, 271.5, 359.9] {
            assert_eq!(destination_point(p, b, 0.0).unwrap(), p);
        }
    }

    #[test]
    fn one_degree_north() {
        // 1° of latitude on a 6,371 km sphere ≈ 111,195 m.
        let p = GeoPoint::new(10.0, 20.0);
        let q = destination_point(p, 0.0, 111_194.93).unwrap();
        assert!((q.lat - 11.0).abs() < 1e-4, "got {q}");
        assert!((q.lon - 20.0).abs() < 1e-9, "got {q}");
    }

    #[test]
    fn destination_wraps_antimeridian() {
        let p = GeoPoint::new(0.0, 179.999);
        let q = destination_point(p, 90.0, 1_000.0).unwrap();
        assert!(q.lon < -179.0, "expected wrap, got {q}");
        assert!(q.is_valid());
    }

    #[test]
    fn destination_rejects_invalid_origin() {
        let err = destination_point(GeoPoint::new(-91.0, 0.0), 0.0, 10.0).unwrap_err();
        assert!(matches!(err, RrError::InvalidCoordinate { .. }));
    }

    #[test]
    fn destination_rejects_non_finite_distance() {
        let p = GeoPoint::new(0.0, 0.0);
        assert!(destination_point(p, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn distance_matches_destination() {
        let p = GeoPoint::new(30.2672, -97.7431);
        let q = destination_point(p, 123.0, 500.0).unwrap();
        let d = distance_m(p, q).unwrap();
        assert!((d - 500.0).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn bearing_round_trip_randomized() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let origin = GeoPoint::new(rng.gen_range(-60.0..60.0), rng.gen_range(-179.0..179.0));
            let b: f64 = rng.gen_range(0.0..360.0);
            let d: f64 = rng.gen_range(1.0..50_000.0);
            let dest = destination_point(origin, b, d).unwrap();
            let back = bearing(origin, dest).unwrap();
            assert!(
                angle_diff(back, b) < 1e-6,
                "origin {origin} bearing {b} distance {d}: got {back}"
            );
        }
    }

    #[test]
    fn normalize_degrees_edges() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1e-17), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, SystemClock, Timestamp};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(1_000);
        assert_eq!(t + 500, Timestamp(1_500));
        assert_eq!(t.offset_ms(-200), Timestamp(800));
        assert_eq!(Timestamp(1_500) - Timestamp(1_000), 500);
        assert_eq!(Timestamp(1_000) - Timestamp(1_500), -500);
    }

    #[test]
    fn timestamp_saturates() {
        assert_eq!(Timestamp(i64::MAX) + 1, Timestamp(i64::MAX));
        assert_eq!(Timestamp(i64::MIN) - Timestamp(1), i64::MIN);
        assert_eq!(Timestamp(i64::MIN) - 1_i64, Timestamp(i64::MIN));
    }

    #[test]
    fn timestamp_minus_millis() {
        let t = Timestamp(1_000);
        assert_eq!(t - 250_i64, Timestamp(750));
        assert_eq!(t - 1_500_i64, Timestamp(-500));
        assert_eq!(t - -250_i64, t + 250);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(Timestamp(10));
        let handle = clock.clone();
        handle.advance(90);
        assert_eq!(clock.now(), Timestamp(100));
        handle.set(Timestamp(5));
        assert_eq!(clock.now(), Timestamp(5));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert!(a >= Timestamp::ZERO);
    }

    #[test]
    fn clock_through_reference() {
        let clock = ManualClock::new(Timestamp(42));
        let by_ref: &dyn Clock = &clock;
        assert_eq!((&by_ref).now(), Timestamp(42));
    }
}

#[cfg(test)]
mod config {
    use crate::ScheduleConfig;

    #[test]
    fn defaults() {
        let cfg = ScheduleConfig::default();
        assert_eq!(cfg.duration_ms, 4_000);
        assert_eq!(cfg.gap_ms, 1_000);
        assert_eq!(cfg.scroll_delay_ms, 100);
    }

    #[test]
    fn delay_per_rank() {
        let cfg = ScheduleConfig::default();
        assert_eq!(cfg.delay_for_rank(0), 0);
        assert_eq!(cfg.delay_for_rank(1), 5_000);
        assert_eq!(cfg.delay_for_rank(2), 10_000);
    }

    #[test]
    fn consecutive_routes_never_overlap() {
        let cfg = ScheduleConfig { duration_ms: 300, gap_ms: 0, scroll_delay_ms: 0 };
        for rank in 0..10 {
            assert!(cfg.delay_for_rank(rank + 1) - cfg.delay_for_rank(rank) >= cfg.duration_ms);
        }
    }

    #[test]
    fn total_time() {
        let cfg = ScheduleConfig::default();
        assert_eq!(cfg.total_ms(0), 0);
        assert_eq!(cfg.total_ms(1), 4_000);
        assert_eq!(cfg.total_ms(3), 14_000);
    }

    #[test]
    fn validate_rejects_huge_values() {
        let cfg = ScheduleConfig { duration_ms: u64::MAX, ..ScheduleConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(ScheduleConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod ids {
    use crate::RunId;

    #[test]
    fn next_increments() {
        assert_eq!(RunId::NONE.next(), RunId(1));
        assert!(RunId(3) < RunId(3).next());
    }

    #[test]
    fn display() {
        assert_eq!(RunId(7).to_string(), "run#7");
    }
}
