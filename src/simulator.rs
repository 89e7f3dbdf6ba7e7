//! Timed progress simulation along a resolved route.
//!
//! The simulator is either idle or tracking one route. While tracking, a
//! single background ticker advances the waypoint index once per interval.
//! Starting a new route or resetting cancels the ticker and bumps the
//! session epoch; a tick carrying an older epoch is dropped without
//! touching state, so a superseded ticker can never move the marker of a
//! newer route.
//!
//! Every state change publishes a [`ProgressView`] (or `None` when idle) on
//! a `watch` channel for the rendering layer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::config::SimulatorConfig;
use crate::progress::{DistanceSnapshot, ProgressState, ProgressView};
use crate::route::Route;

/// Shortest interval the ticker accepts; `tokio::time::interval` rejects zero.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub enum SimState {
    Idle,
    Tracking(ProgressState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickOutcome {
    Advanced(usize),
    /// Already at the last waypoint.
    Unchanged,
    /// Tick belongs to a session that has since been reset or replaced.
    Stale,
}

struct Inner {
    epoch: u64,
    state: SimState,
    follow: bool,
}

struct Shared {
    inner: Mutex<Inner>,
    views: watch::Sender<Option<ProgressView>>,
    speed_kmh: f64,
}

impl Shared {
    /// Advances the active session if `epoch` still matches it.
    ///
    /// `None` skips the epoch check (manual stepping by the owner).
    fn step(&self, epoch: Option<u64>) -> TickOutcome {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if epoch.is_some_and(|e| e != inner.epoch) {
            return TickOutcome::Stale;
        }
        let SimState::Tracking(progress) = &mut inner.state else {
            return TickOutcome::Stale;
        };
        if !progress.advance() {
            return TickOutcome::Unchanged;
        }

        // Publish under the lock so views are never reordered against a reset.
        self.views
            .send_replace(Some(progress.view(self.speed_kmh, inner.follow)));
        TickOutcome::Advanced(progress.current_index())
    }
}

/// Owns the background ticker task for one tracking session.
///
/// `cancel` consumes the handle, so a ticker is cancelled at most once.
#[derive(Debug)]
struct TickHandle {
    epoch: u64,
    task: JoinHandle<()>,
}

impl TickHandle {
    fn spawn(shared: Arc<Shared>, epoch: u64, period: Duration) -> Self {
        let period = period.max(MIN_TICK_INTERVAL);
        let task = tokio::spawn(run_ticker(shared, epoch, period));
        Self { epoch, task }
    }

    fn cancel(self) {
        trace!(epoch = self.epoch, "Cancelling ticker");
        self.task.abort();
    }

    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn run_ticker(shared: Arc<Shared>, epoch: u64, period: Duration) {
    // First tick lands one full period after the session starts.
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        match shared.step(Some(epoch)) {
            TickOutcome::Advanced(index) => debug!(epoch, index, "Advanced to waypoint"),
            TickOutcome::Unchanged => trace!(epoch, "At last waypoint, tick ignored"),
            TickOutcome::Stale => {
                debug!(epoch, "Dropping stale tick");
                break;
            }
        }
    }
}

/// Idle/tracking state machine with a periodic waypoint advance.
///
/// Must be driven from within a Tokio runtime; [`ProgressSimulator::start_tracking`]
/// spawns the ticker task on the current runtime.
pub struct ProgressSimulator {
    shared: Arc<Shared>,
    ticker: Option<TickHandle>,
    tick_interval: Duration,
}

impl ProgressSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let (views, _) = watch::channel(None);
        let shared = Shared {
            inner: Mutex::new(Inner {
                epoch: 0,
                state: SimState::Idle,
                follow: config.follow,
            }),
            views,
            speed_kmh: config.average_speed_kmh,
        };
        Self {
            shared: Arc::new(shared),
            ticker: None,
            tick_interval: config.tick_interval,
        }
    }

    /// Begins tracking `route` at its first waypoint, replacing any active
    /// session and its ticker.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn start_tracking(&mut self, route: impl Into<Arc<Route>>) {
        let route = route.into();
        self.cancel_ticker();

        let epoch = {
            let mut inner = self.shared.inner.lock();
            inner.epoch += 1;
            let progress = ProgressState::new(Arc::clone(&route));
            self.shared
                .views
                .send_replace(Some(progress.view(self.shared.speed_kmh, inner.follow)));
            inner.state = SimState::Tracking(progress);
            inner.epoch
        };

        info!(
            tracking_id = %route.tracking_id(),
            waypoints = route.path().len(),
            epoch,
            "Tracking started"
        );
        self.ticker = Some(TickHandle::spawn(
            Arc::clone(&self.shared),
            epoch,
            self.tick_interval,
        ));
    }

    /// Stops the ticker and returns to idle.
    pub fn reset(&mut self) {
        self.cancel_ticker();

        let mut inner = self.shared.inner.lock();
        inner.epoch += 1;
        let previous = std::mem::replace(&mut inner.state, SimState::Idle);
        if let SimState::Tracking(progress) = previous {
            info!(tracking_id = %progress.route().tracking_id(), "Tracking cleared");
            self.shared.views.send_replace(None);
        }
    }

    /// Applies one tick transition immediately.
    ///
    /// Returns the new index, or `None` when idle or already at the last
    /// waypoint.
    pub fn advance(&self) -> Option<usize> {
        match self.shared.step(None) {
            TickOutcome::Advanced(index) => Some(index),
            TickOutcome::Unchanged | TickOutcome::Stale => None,
        }
    }

    /// Toggles pan-to-follow, republishing the current view.
    pub fn set_follow(&mut self, follow: bool) {
        let mut guard = self.shared.inner.lock();
        let inner = &mut *guard;
        if inner.follow == follow {
            return;
        }
        inner.follow = follow;
        if let SimState::Tracking(progress) = &inner.state {
            self.shared
                .views
                .send_replace(Some(progress.view(self.shared.speed_kmh, follow)));
        }
    }

    pub fn follow(&self) -> bool {
        self.shared.inner.lock().follow
    }

    pub fn state(&self) -> SimState {
        self.shared.inner.lock().state.clone()
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.shared.inner.lock().state, SimState::Tracking(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.shared.inner.lock().state {
            SimState::Tracking(progress) => Some(progress.current_index()),
            SimState::Idle => None,
        }
    }

    pub fn route(&self) -> Option<Arc<Route>> {
        match &self.shared.inner.lock().state {
            SimState::Tracking(progress) => Some(Arc::clone(progress.route())),
            SimState::Idle => None,
        }
    }

    pub fn snapshot(&self) -> Option<DistanceSnapshot> {
        match &self.shared.inner.lock().state {
            SimState::Tracking(progress) => Some(progress.snapshot()),
            SimState::Idle => None,
        }
    }

    /// A copy of the most recently published view.
    pub fn view(&self) -> Option<ProgressView> {
        self.shared.views.borrow().clone()
    }

    /// Receiver for every published view; `None` means idle.
    ///
    /// Do not hold a `watch::Ref` from [`watch::Receiver::borrow`] across a
    /// call that changes state ([`advance`](Self::advance),
    /// [`set_follow`](Self::set_follow), [`start_tracking`](Self::start_tracking),
    /// [`reset`](Self::reset)) on the same thread. The `Ref` holds the
    /// channel's read lock and the publish blocks on it forever. Clone the
    /// view out of the borrow first.
    pub fn subscribe(&self) -> watch::Receiver<Option<ProgressView>> {
        self.shared.views.subscribe()
    }

    /// Whether a ticker task is live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}
