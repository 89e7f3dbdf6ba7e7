//! parcel-tracker core
//!
//! Resolves tracking ids to static routes and simulates a parcel moving
//! along them, with great-circle progress and a fixed-speed ETA.

pub mod config;
pub mod coordinate;
pub mod error;
pub mod eta;
pub mod haversine;
pub mod polyline;
pub mod progress;
pub mod registry;
pub mod resolver;
pub mod route;
pub mod simulator;
pub mod traits;
pub mod tracker;

pub use config::{SimulatorConfig, TrackerConfig};
pub use coordinate::Coordinate;
pub use error::{CoordinateError, TrackingError};
pub use progress::{DistanceSnapshot, ProgressState, ProgressView};
pub use route::{Route, ShipmentStatus};
pub use simulator::{ProgressSimulator, SimState};
pub use tracker::ParcelTracker;
