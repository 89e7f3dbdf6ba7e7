//! Position along a route and the values derived from it.

use std::sync::Arc;

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::eta;
use crate::route::Route;

/// Total, covered and remaining distance in meters for one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceSnapshot {
    pub total_m: f64,
    pub covered_m: f64,
    pub remaining_m: f64,
}

impl DistanceSnapshot {
    pub fn at(route: &Route, index: usize) -> Self {
        let total_m = route.path().length_m();
        let covered_m = route.path().length_to_m(index);
        Self {
            total_m,
            covered_m,
            remaining_m: (total_m - covered_m).max(0.0),
        }
    }
}

/// The current waypoint index into a shared route.
///
/// The index only moves forward and never passes the last waypoint.
#[derive(Debug, Clone)]
pub struct ProgressState {
    route: Arc<Route>,
    current_index: usize,
}

impl ProgressState {
    pub fn new(route: Arc<Route>) -> Self {
        Self {
            route,
            current_index: 0,
        }
    }

    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Moves one waypoint forward, clamped at the last one.
    ///
    /// Returns `true` if the index changed.
    pub fn advance(&mut self) -> bool {
        let next = (self.current_index + 1).min(self.route.last_index());
        let moved = next != self.current_index;
        self.current_index = next;
        moved
    }

    pub fn at_last_waypoint(&self) -> bool {
        self.current_index == self.route.last_index()
    }

    pub fn snapshot(&self) -> DistanceSnapshot {
        DistanceSnapshot::at(&self.route, self.current_index)
    }

    pub fn marker(&self) -> Coordinate {
        self.route.path().points()[self.current_index]
    }

    pub fn travelled(&self) -> &[Coordinate] {
        self.route.path().prefix(self.current_index)
    }

    pub fn view(&self, speed_kmh: f64, follow: bool) -> ProgressView {
        let distance = self.snapshot();
        let eta_minutes = eta::estimate_minutes(distance.remaining_m, speed_kmh);
        ProgressView {
            route: Arc::clone(&self.route),
            travelled: self.travelled().to_vec(),
            marker: self.marker(),
            current_index: self.current_index,
            fit_bounds: self.current_index == 0,
            follow,
            distance,
            eta_minutes,
            eta: eta::format_eta(eta_minutes),
        }
    }
}

/// Everything a map renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    /// Full route; draw `route.path()` as the planned line.
    pub route: Arc<Route>,
    /// Waypoints already passed, including the current one.
    pub travelled: Vec<Coordinate>,
    pub marker: Coordinate,
    pub current_index: usize,
    /// First frame of a route; the renderer fits the viewport to its bounds.
    pub fit_bounds: bool,
    pub follow: bool,
    pub distance: DistanceSnapshot,
    pub eta_minutes: f64,
    pub eta: String,
}
