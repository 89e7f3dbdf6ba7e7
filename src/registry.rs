//! Built-in route table keyed by tracking id.
//!
//! Coordinates follow the main highway corridor of each route.

use crate::coordinate::Coordinate;
use crate::route::ShipmentStatus;
use crate::traits::RouteSource;

/// Static shipment data a [`crate::route::Route`] is stamped from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTemplate {
    pub tracking_id: &'static str,
    pub status: ShipmentStatus,
    pub carrier: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub path: &'static [Coordinate],
}

const CHENNAI_PUDUCHERRY: &[Coordinate] = &[
    Coordinate::new(13.0827, 80.2707),
    Coordinate::new(12.9165, 80.2300),
    Coordinate::new(12.6208, 80.1945),
    Coordinate::new(12.4244, 79.9822),
    Coordinate::new(12.1851, 79.8510),
    Coordinate::new(11.9416, 79.8083),
];

const BENGALURU_MYSURU: &[Coordinate] = &[
    Coordinate::new(12.9716, 77.5946),
    Coordinate::new(12.7209, 77.2799),
    Coordinate::new(12.5218, 76.8951),
    Coordinate::new(12.4244, 76.6878),
    Coordinate::new(12.2958, 76.6394),
];

const DELHI_JAIPUR: &[Coordinate] = &[
    Coordinate::new(28.6139, 77.2090),
    Coordinate::new(28.4595, 77.0266),
    Coordinate::new(28.1960, 76.6195),
    Coordinate::new(27.8974, 76.4183),
    Coordinate::new(27.5530, 76.1346),
    Coordinate::new(27.2046, 75.9800),
    Coordinate::new(26.9124, 75.7873),
];

const MUMBAI_PUNE: &[Coordinate] = &[
    Coordinate::new(19.0760, 72.8777),
    Coordinate::new(19.0330, 73.0297),
    Coordinate::new(18.9894, 73.1175),
    Coordinate::new(18.7546, 73.4062),
    Coordinate::new(18.6298, 73.7997),
    Coordinate::new(18.5204, 73.8567),
];

const PRESETS: &[RouteTemplate] = &[
    RouteTemplate {
        tracking_id: "CHN123",
        status: ShipmentStatus::InTransit,
        carrier: "BlueDart",
        origin: "Chennai",
        destination: "Puducherry",
        path: CHENNAI_PUDUCHERRY,
    },
    RouteTemplate {
        tracking_id: "BLR555",
        status: ShipmentStatus::OutForDelivery,
        carrier: "Delhivery",
        origin: "Bengaluru",
        destination: "Mysuru",
        path: BENGALURU_MYSURU,
    },
    RouteTemplate {
        tracking_id: "DEL789",
        status: ShipmentStatus::InTransit,
        carrier: "DTDC",
        origin: "New Delhi",
        destination: "Jaipur",
        path: DELHI_JAIPUR,
    },
    RouteTemplate {
        tracking_id: "BOM246",
        status: ShipmentStatus::Dispatched,
        carrier: "Ecom Express",
        origin: "Mumbai",
        destination: "Pune",
        path: MUMBAI_PUNE,
    },
];

/// Exact-match lookup against the built-in presets.
pub fn lookup(tracking_id: &str) -> Option<&'static RouteTemplate> {
    PRESETS.iter().find(|preset| preset.tracking_id == tracking_id)
}

/// [`RouteSource`] backed by the built-in presets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRegistry;

impl StaticRegistry {
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|preset| preset.tracking_id)
    }
}

impl RouteSource for StaticRegistry {
    fn lookup(&self, tracking_id: &str) -> Option<RouteTemplate> {
        lookup(tracking_id).copied()
    }
}
