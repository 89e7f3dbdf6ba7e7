//! Great-circle distance along waypoint sequences.
//!
//! Spherical Earth model; good to within ~0.5% for the short overland
//! routes the registry ships.

use crate::coordinate::Coordinate;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates in meters.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1.0 for antipodal points.
    let c = 2.0 * h.min(1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Sum of [`distance`] over consecutive pairs. Zero for fewer than two points.
pub fn path_distance(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|pair| distance(pair[0], pair[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        let p = Coordinate::new(12.9716, 77.5946);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Bengaluru to Mysuru, roughly 125 km as the crow flies
        let km = distance(
            Coordinate::new(12.9716, 77.5946),
            Coordinate::new(12.2958, 76.6394),
        ) / 1000.0;
        assert!(km > 120.0 && km < 135.0, "BLR to Mysuru should be ~127km, got {}", km);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(36.17, -115.14);
        let b = Coordinate::new(34.05, -118.24);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - expected).abs() < 1.0);
    }

    #[test]
    fn test_path_distance_short_paths() {
        assert_eq!(path_distance(&[]), 0.0);
        assert_eq!(path_distance(&[Coordinate::new(1.0, 2.0)]), 0.0);
    }

    #[test]
    fn test_path_distance_sums_legs() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let c = Coordinate::new(1.0, 1.0);
        let total = path_distance(&[a, b, c]);
        assert!((total - (distance(a, b) + distance(b, c))).abs() < 1e-9);
    }
}
