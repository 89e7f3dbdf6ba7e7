//! Test fixtures for parcel-tracker.
//!
//! An in-memory route source with hand-picked paths, so scenarios do not
//! depend on the built-in presets.

use std::collections::HashMap;

use parcel_tracker::coordinate::Coordinate;
use parcel_tracker::registry::RouteTemplate;
use parcel_tracker::traits::RouteSource;
use parcel_tracker::ShipmentStatus;

/// Straight run along the equator, one degree per leg.
pub const EQUATOR_RUN: &[Coordinate] = &[
    Coordinate::new(0.0, 0.0),
    Coordinate::new(0.0, 1.0),
    Coordinate::new(0.0, 2.0),
];

pub const SINGLE_POINT: &[Coordinate] = &[Coordinate::new(10.0, 10.0)];

#[derive(Debug, Default)]
pub struct MemorySource {
    routes: HashMap<&'static str, RouteTemplate>,
}

impl MemorySource {
    pub fn with_route(mut self, tracking_id: &'static str, path: &'static [Coordinate]) -> Self {
        self.routes.insert(
            tracking_id,
            RouteTemplate {
                tracking_id,
                status: ShipmentStatus::InTransit,
                carrier: "Fixture Freight",
                origin: "Start",
                destination: "End",
                path,
            },
        );
        self
    }
}

impl RouteSource for MemorySource {
    fn lookup(&self, tracking_id: &str) -> Option<RouteTemplate> {
        self.routes.get(tracking_id).copied()
    }
}
