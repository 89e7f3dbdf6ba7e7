//! Seams between the tracking core and its data sources.

use crate::registry::RouteTemplate;

/// Provides static route data by tracking id.
///
/// Callers pass an already-normalized (trimmed, uppercase) id.
pub trait RouteSource {
    fn lookup(&self, tracking_id: &str) -> Option<RouteTemplate>;
}

impl<S: RouteSource + ?Sized> RouteSource for &S {
    fn lookup(&self, tracking_id: &str) -> Option<RouteTemplate> {
        (**self).lookup(tracking_id)
    }
}
