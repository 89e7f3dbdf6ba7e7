//! Command-line driver: resolve a tracking id and print progress updates.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parcel_tracker::{ParcelTracker, ProgressView, SimulatorConfig, TrackerConfig};

#[derive(Debug, Parser)]
#[command(name = "parcel-track", about = "Simulate a parcel moving along its route")]
struct Args {
    /// Tracking id, e.g. BLR555 (case-insensitive)
    id: String,

    /// Stop after this many waypoint advances
    #[arg(long)]
    ticks: Option<usize>,

    /// Seconds between waypoint advances
    #[arg(long, default_value_t = 15)]
    tick_secs: u64,

    /// Assumed average speed for the ETA
    #[arg(long, default_value_t = parcel_tracker::eta::DEFAULT_SPEED_KMH)]
    speed_kmh: f64,

    /// Simulated lookup latency in milliseconds
    #[arg(long, default_value_t = 500)]
    latency_ms: u64,

    /// Do not pan the map to follow the marker
    #[arg(long)]
    no_follow: bool,

    /// Print each update as a JSON line
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> TrackerConfig {
        TrackerConfig::default()
            .with_lookup_latency(Duration::from_millis(self.latency_ms))
            .with_simulator(
                SimulatorConfig::default()
                    .with_tick_interval(Duration::from_secs(self.tick_secs))
                    .with_average_speed_kmh(self.speed_kmh)
                    .with_follow(!self.no_follow),
            )
    }
}

fn print_view(view: &ProgressView, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(view)?);
        return Ok(());
    }
    let route = &view.route;
    println!(
        "{} [{}] waypoint {}/{} at ({:.4}, {:.4}) covered {:.1} km, remaining {:.1} km, ETA {}",
        route.tracking_id(),
        route.status(),
        view.current_index + 1,
        route.path().len(),
        view.marker.lat,
        view.marker.lon,
        view.distance.covered_m / 1000.0,
        view.distance.remaining_m / 1000.0,
        view.eta,
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut tracker = ParcelTracker::new(args.config());
    let mut views = tracker.subscribe();

    let route = match tracker.search(&args.id).await {
        Ok(route) => route,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        carrier = %route.carrier(),
        origin = %route.origin(),
        destination = %route.destination(),
        "Tracking {}",
        route.tracking_id()
    );

    let limit = args.ticks.unwrap_or(usize::MAX);
    let mut advances = 0;
    loop {
        let view = views.borrow_and_update().clone();
        let Some(view) = view else { break };
        if let Err(err) = print_view(&view, args.json) {
            error!("Failed to encode update: {}", err);
            return ExitCode::FAILURE;
        }
        if view.current_index == route.last_index() || advances >= limit {
            break;
        }
        if views.changed().await.is_err() {
            break;
        }
        advances += 1;
    }

    tracker.clear();
    ExitCode::SUCCESS
}
