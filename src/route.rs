//! Resolved shipment routes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TrackingError;
use crate::polyline::Polyline;
use crate::registry::RouteTemplate;

/// Carrier-reported shipment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Dispatched,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShipmentStatus::Dispatched => "Dispatched",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::OutForDelivery => "Out for Delivery",
            ShipmentStatus::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

/// A shipment and the path it travels.
///
/// Immutable once built; a new search builds a new route. The only
/// constructor is [`Route::from_template`], so every route has at least two
/// in-range waypoints:
///
/// ```compile_fail
/// use parcel_tracker::polyline::Polyline;
/// use parcel_tracker::{Route, ShipmentStatus};
///
/// let route = Route {
///     tracking_id: "EMPTY".to_string(),
///     status: ShipmentStatus::InTransit,
///     carrier: String::new(),
///     origin: String::new(),
///     destination: String::new(),
///     path: Polyline::new(vec![]),
///     last_updated: chrono::Utc::now(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    tracking_id: String,
    status: ShipmentStatus,
    carrier: String,
    origin: String,
    destination: String,
    path: Polyline,
    last_updated: DateTime<Utc>,
}

impl Route {
    /// Stamps a route from a template with `last_updated` set to `now`.
    ///
    /// Fails if the template path has fewer than two waypoints or holds an
    /// out-of-range coordinate.
    pub fn from_template(
        template: &RouteTemplate,
        now: DateTime<Utc>,
    ) -> Result<Self, TrackingError> {
        let invalid = |reason: String| TrackingError::InvalidRoute {
            id: template.tracking_id.to_string(),
            reason,
        };

        if template.path.len() < 2 {
            return Err(invalid(format!(
                "path needs at least 2 waypoints, got {}",
                template.path.len()
            )));
        }
        if let Some(position) = template.path.iter().position(|p| !p.is_valid()) {
            return Err(invalid(format!("waypoint {} is out of range", position)));
        }

        Ok(Self {
            tracking_id: template.tracking_id.to_string(),
            status: template.status,
            carrier: template.carrier.to_string(),
            origin: template.origin.to_string(),
            destination: template.destination.to_string(),
            path: Polyline::from(template.path),
            last_updated: now,
        })
    }

    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn path(&self) -> &Polyline {
        &self.path
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn last_index(&self) -> usize {
        // from_template rejects paths shorter than two waypoints.
        self.path.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::registry;

    fn template(path: &'static [Coordinate]) -> RouteTemplate {
        RouteTemplate {
            tracking_id: "TST001",
            status: ShipmentStatus::InTransit,
            carrier: "Test",
            origin: "A",
            destination: "B",
            path,
        }
    }

    #[test]
    fn test_from_template_copies_fields() {
        let now = Utc::now();
        let template = registry::lookup("BLR555").unwrap();
        let route = Route::from_template(template, now).unwrap();
        assert_eq!(route.tracking_id(), "BLR555");
        assert_eq!(route.origin(), "Bengaluru");
        assert_eq!(route.path().points(), template.path);
        assert_eq!(route.last_updated(), now);
        assert_eq!(route.last_index(), 4);
    }

    #[test]
    fn test_single_waypoint_rejected() {
        const ONE: &[Coordinate] = &[Coordinate::new(1.0, 1.0)];
        let err = Route::from_template(&template(ONE), Utc::now()).unwrap_err();
        assert!(matches!(err, TrackingError::InvalidRoute { .. }));
    }

    #[test]
    fn test_out_of_range_waypoint_rejected() {
        const BAD: &[Coordinate] = &[Coordinate::new(1.0, 1.0), Coordinate::new(91.0, 1.0)];
        let err = Route::from_template(&template(BAD), Utc::now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route for TST001: waypoint 1 is out of range"
        );
    }

    #[test]
    fn test_empty_path_rejected() {
        const EMPTY: &[Coordinate] = &[];
        let err = Route::from_template(&template(EMPTY), Utc::now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route for TST001: path needs at least 2 waypoints, got 0"
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ShipmentStatus::OutForDelivery.to_string(), "Out for Delivery");
    }
}
