//! Polyline representation for route geometries.
//!
//! Waypoint order is the direction of travel. The polyline is never
//! mutated after construction.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::haversine;

/// An ordered sequence of waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the final waypoint, or `None` for an empty polyline.
    pub fn last_index(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.points.get(index).copied()
    }

    /// Waypoints from the start up to and including `index`.
    ///
    /// An index past the end yields the whole polyline.
    pub fn prefix(&self, index: usize) -> &[Coordinate] {
        let end = index.saturating_add(1).min(self.points.len());
        &self.points[..end]
    }

    /// Total great-circle length in meters.
    pub fn length_m(&self) -> f64 {
        haversine::path_distance(&self.points)
    }

    /// Great-circle length of [`Polyline::prefix`] in meters.
    pub fn length_to_m(&self, index: usize) -> f64 {
        haversine::path_distance(self.prefix(index))
    }

    /// South-west and north-east corners of the bounding box.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let first = *self.points.first()?;
        let (sw, ne) = self.points.iter().fold((first, first), |(sw, ne), p| {
            (
                Coordinate::new(sw.lat.min(p.lat), sw.lon.min(p.lon)),
                Coordinate::new(ne.lat.max(p.lat), ne.lon.max(p.lon)),
            )
        });
        Some((sw, ne))
    }
}

impl From<&[Coordinate]> for Polyline {
    fn from(points: &[Coordinate]) -> Self {
        Self::new(points.to_vec())
    }
}
