//! Tunables for lookup latency and progress simulation.

use std::time::Duration;

use crate::eta::DEFAULT_SPEED_KMH;

/// Artificial network latency applied to every lookup.
pub const DEFAULT_LOOKUP_LATENCY: Duration = Duration::from_millis(500);

/// Interval between waypoint advances.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub tick_interval: Duration,
    /// Assumed average speed used for ETA.
    pub average_speed_kmh: f64,
    /// Whether the renderer should pan to follow the marker.
    pub follow: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            average_speed_kmh: DEFAULT_SPEED_KMH,
            follow: true,
        }
    }
}

impl SimulatorConfig {
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_average_speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.average_speed_kmh = speed_kmh;
        self
    }

    pub fn with_follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub lookup_latency: Duration,
    pub simulator: SimulatorConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookup_latency: DEFAULT_LOOKUP_LATENCY,
            simulator: SimulatorConfig::default(),
        }
    }
}

impl TrackerConfig {
    pub fn with_lookup_latency(mut self, latency: Duration) -> Self {
        self.lookup_latency = latency;
        self
    }

    pub fn with_simulator(mut self, simulator: SimulatorConfig) -> Self {
        self.simulator = simulator;
        self
    }
}
