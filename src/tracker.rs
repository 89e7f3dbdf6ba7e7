//! Search and clear orchestration over the resolver and simulator.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::TrackerConfig;
use crate::error::TrackingError;
use crate::progress::ProgressView;
use crate::registry::StaticRegistry;
use crate::resolver::TrackingResolver;
use crate::route::Route;
use crate::simulator::ProgressSimulator;
use crate::traits::RouteSource;

/// Entry point for the input surface: `search` an id, `clear` to stop.
pub struct ParcelTracker<S = StaticRegistry> {
    resolver: TrackingResolver<S>,
    simulator: ProgressSimulator,
}

impl ParcelTracker<StaticRegistry> {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_source(StaticRegistry, config)
    }
}

impl Default for ParcelTracker<StaticRegistry> {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl<S: RouteSource> ParcelTracker<S> {
    pub fn with_source(source: S, config: TrackerConfig) -> Self {
        Self {
            resolver: TrackingResolver::new(source).with_latency(config.lookup_latency),
            simulator: ProgressSimulator::new(config.simulator),
        }
    }

    /// Resolves `raw_id` and starts tracking it.
    ///
    /// Any active session is cleared before the lookup begins, so a failed
    /// search leaves the simulator idle with no ticker running.
    pub async fn search(&mut self, raw_id: &str) -> Result<Arc<Route>, TrackingError> {
        self.simulator.reset();
        let route = Arc::new(self.resolver.resolve(raw_id).await?);
        self.simulator.start_tracking(Arc::clone(&route));
        Ok(route)
    }

    pub fn clear(&mut self) {
        self.simulator.reset();
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ProgressView>> {
        self.simulator.subscribe()
    }

    pub fn simulator(&self) -> &ProgressSimulator {
        &self.simulator
    }

    pub fn simulator_mut(&mut self) -> &mut ProgressSimulator {
        &mut self.simulator
    }

    pub fn resolver(&self) -> &TrackingResolver<S> {
        &self.resolver
    }
}
