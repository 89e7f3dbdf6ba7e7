//! Tracking-id resolution with simulated network latency.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::DEFAULT_LOOKUP_LATENCY;
use crate::error::TrackingError;
use crate::registry::StaticRegistry;
use crate::route::Route;
use crate::traits::RouteSource;

/// Trims surrounding whitespace and uppercases.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Resolves tracking ids against a [`RouteSource`].
///
/// Each lookup sleeps for the configured latency before consulting the
/// source. The sleep yields to the runtime; it never blocks a thread.
/// Failures are not retried.
#[derive(Debug, Clone)]
pub struct TrackingResolver<S = StaticRegistry> {
    source: S,
    latency: Duration,
}

impl Default for TrackingResolver<StaticRegistry> {
    fn default() -> Self {
        Self::new(StaticRegistry)
    }
}

impl<S: RouteSource> TrackingResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            latency: DEFAULT_LOOKUP_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn resolve(&self, raw_id: &str) -> Result<Route, TrackingError> {
        let id = normalize_id(raw_id);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let Some(template) = self.source.lookup(&id) else {
            warn!(tracking_id = %id, "Tracking id not found");
            return Err(TrackingError::NotFound { id });
        };

        let route = Route::from_template(&template, Utc::now())?;
        debug!(
            tracking_id = %route.tracking_id(),
            waypoints = route.path().len(),
            origin = %route.origin(),
            destination = %route.destination(),
            "Resolved route"
        );
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id("  chn123 \n"), "CHN123");
        assert_eq!(normalize_id("BLR555"), "BLR555");
        assert_eq!(normalize_id("   "), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_is_case_insensitive() {
        let resolver = TrackingResolver::new(StaticRegistry);
        let lower = resolver.resolve("chn123").await.unwrap();
        let upper = resolver.resolve("CHN123").await.unwrap();
        assert_eq!(lower.tracking_id(), upper.tracking_id());
        assert_eq!(lower.path(), upper.path());
        assert_eq!(lower.carrier(), upper.carrier());
        assert_eq!(lower.status(), upper.status());
        assert_eq!(lower.origin(), upper.origin());
        assert_eq!(lower.destination(), upper.destination());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_unknown_id() {
        let err = TrackingResolver::new(StaticRegistry).resolve("zzz000").await.unwrap_err();
        assert_eq!(
            err,
            TrackingError::NotFound {
                id: "ZZZ000".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_waits_for_latency() {
        let resolver = TrackingResolver::new(StaticRegistry).with_latency(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        resolver.resolve("BLR555").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_resolve_stamps_last_updated() {
        let before = Utc::now();
        let route = TrackingResolver::new(StaticRegistry)
            .with_latency(Duration::ZERO)
            .resolve("DEL789")
            .await
            .unwrap();
        assert!(route.last_updated() >= before);
    }
}
