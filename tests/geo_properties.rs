//! Property tests for great-circle distances and route coverage.

use chrono::Utc;
use proptest::prelude::*;

use parcel_tracker::coordinate::Coordinate;
use parcel_tracker::haversine::{distance, path_distance};
use parcel_tracker::registry::{self, StaticRegistry};
use parcel_tracker::{DistanceSnapshot, Route};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn tolerance(meters: f64) -> f64 {
    1e-6 * meters.max(1.0)
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = distance(a, b);
        prop_assert!((ab - distance(b, a)).abs() <= tolerance(ab));
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn distinct_points_are_apart(
        a in (-89.9..=89.9f64, -179.9..=179.9f64),
        b in (-89.9..=89.9f64, -179.9..=179.9f64),
    ) {
        // Away from the poles and the antimeridian, distinct degrees mean distinct points.
        prop_assume!((a.0 - b.0).abs() > 1e-9 || (a.1 - b.1).abs() > 1e-9);
        let a = Coordinate::new(a.0, a.1);
        let b = Coordinate::new(b.0, b.1);
        prop_assert!(distance(a, b) > 0.0);
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = distance(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * 6_371_000.0 + 1.0);
    }

    #[test]
    fn path_distance_ignores_direction(path in prop::collection::vec(coordinate(), 0..8)) {
        let forward = path_distance(&path);
        let reversed: Vec<_> = path.iter().rev().copied().collect();
        prop_assert!((forward - path_distance(&reversed)).abs() <= tolerance(forward));
    }

    #[test]
    fn prefix_distance_is_monotonic(path in prop::collection::vec(coordinate(), 2..8)) {
        let lengths: Vec<_> = (1..=path.len()).map(|n| path_distance(&path[..n])).collect();
        for pair in lengths.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }
}

#[test]
fn covered_plus_remaining_is_total_for_presets() {
    for id in StaticRegistry.ids() {
        let route = Route::from_template(registry::lookup(id).unwrap(), Utc::now()).unwrap();
        let mut previous_covered = 0.0;
        for index in 0..route.path().len() {
            let snapshot = DistanceSnapshot::at(&route, index);
            assert!(
                (snapshot.covered_m + snapshot.remaining_m - snapshot.total_m).abs() < 1e-6,
                "{} at {}: {:?}",
                id,
                index,
                snapshot
            );
            assert!(snapshot.covered_m >= previous_covered);
            assert!(snapshot.covered_m <= snapshot.total_m);
            previous_covered = snapshot.covered_m;
        }
    }
}
