//! Telemetry store.
//!
//! Owns the latest decoded telemetry and serves both consumption styles:
//! non-blocking polled reads and broadcast push updates.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::data::{Metric, TelemetryState, TelemetryUpdate};
use crate::protocol::decode;

/// Callback handle for unregistering callbacks.
pub struct CallbackHandle {
    id: u64,
    unregister_fn: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl CallbackHandle {
    /// Create a new callback handle.
    pub(crate) fn new(id: u64, unregister_fn: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            id,
            unregister_fn: Some(Box::new(unregister_fn)),
        }
    }

    /// Unregister this callback.
    pub fn unregister(mut self) {
        if let Some(f) = self.unregister_fn.take() {
            f();
        }
    }

    /// Get the callback ID.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for CallbackHandle {
    fn drop(&mut self) {
        if let Some(f) = self.unregister_fn.take() {
            f();
        }
    }
}

/// Internal state guarded by a single lock.
///
/// Snapshot reads take the same lock as writes, so a reader never observes a
/// torn value.
struct StoreState {
    /// Latest known telemetry.
    telemetry: TelemetryState,
    /// Time of the last successful apply.
    last_update: Instant,
}

/// Holds the latest decoded meCoffee telemetry.
///
/// Exactly one producer path (the transport's inbound-frame callback) feeds
/// frames in via [`handle_frame`](Self::handle_frame); any number of readers
/// poll the getters or subscribe to push updates. `decode` and `apply` are
/// synchronous and bounded-time, so the producer path never blocks on I/O.
pub struct TelemetryStore {
    /// Internal state.
    state: Arc<RwLock<StoreState>>,
    /// Whether the store is stale.
    is_stale: Arc<AtomicBool>,
    /// Telemetry update channel.
    update_tx: broadcast::Sender<TelemetryState>,
    /// Stale timeout.
    stale_timeout: Duration,
    /// Callback ID counter.
    callback_counter: Arc<AtomicU64>,
}

impl TelemetryStore {
    /// Default stale timeout (15 seconds).
    pub const DEFAULT_STALE_TIMEOUT: Duration = Duration::from_secs(15);

    /// Reference cadence for polling consumers (once per second).
    ///
    /// The machine notifies `tmp` frames roughly once a second, so polling
    /// faster than this only re-reads unchanged values.
    pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

    /// Create a new store with no observed telemetry.
    pub fn new() -> Self {
        Self::with_stale_timeout(Self::DEFAULT_STALE_TIMEOUT)
    }

    /// Create a new store with a custom stale timeout.
    pub fn with_stale_timeout(stale_timeout: Duration) -> Self {
        let (update_tx, _) = broadcast::channel(64);

        Self {
            state: Arc::new(RwLock::new(StoreState {
                telemetry: TelemetryState::new(),
                last_update: Instant::now(),
            })),
            is_stale: Arc::new(AtomicBool::new(false)),
            update_tx,
            stale_timeout,
            callback_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    // === Inbound ===

    /// Handle one raw frame delivered by the transport.
    ///
    /// Decodes the frame and applies the result. Decode failures are
    /// expected (firmware chatter, unknown message kinds) and are logged
    /// rather than returned: the stored telemetry is untouched and the
    /// caller never sees an error.
    pub fn handle_frame(&self, frame: &[u8]) {
        match decode(frame) {
            Ok(update) => self.apply(update),
            Err(err) => {
                warn!("ignoring undecodable frame: {err}");
            }
        }
    }

    /// Apply a decoded update.
    ///
    /// Overwrites exactly the field matching the update's kind, refreshes
    /// the staleness clock, and broadcasts the new snapshot to subscribers.
    pub fn apply(&self, update: TelemetryUpdate) {
        let snapshot = {
            let mut state = self.state.write();
            state.telemetry.apply(update);
            state.last_update = Instant::now();
            state.telemetry
        };

        self.is_stale.store(false, Ordering::SeqCst);

        debug!(
            metric = update.metric().name(),
            value = update.value(),
            "telemetry updated"
        );

        // Receivers may lag or be absent; neither matters to the producer.
        let _ = self.update_tx.send(snapshot);
    }

    /// Forget all observed telemetry.
    ///
    /// Intended for the transport layer on reconnect, when cached values
    /// may describe a previous power cycle of the machine.
    pub fn reset(&self) {
        let snapshot = {
            let mut state = self.state.write();
            state.telemetry = TelemetryState::new();
            state.last_update = Instant::now();
            state.telemetry
        };

        debug!("telemetry reset");

        let _ = self.update_tx.send(snapshot);
    }

    // === Polled reads ===

    /// Current boiler temperature in degrees Celsius, if ever observed.
    pub fn temperature(&self) -> Option<f64> {
        self.state.read().telemetry.temperature
    }

    /// Current heater power in percent, if ever observed.
    pub fn power(&self) -> Option<f64> {
        self.state.read().telemetry.power
    }

    /// Duration of the last espresso shot in seconds, if ever observed.
    pub fn shot_duration(&self) -> Option<f64> {
        self.state.read().telemetry.shot_duration
    }

    /// Read a metric by kind.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.state.read().telemetry.get(metric)
    }

    /// Atomic copy of all three fields.
    pub fn snapshot(&self) -> TelemetryState {
        self.state.read().telemetry
    }

    /// Check if the store is stale (no frame decoded recently).
    pub fn is_stale(&self) -> bool {
        let elapsed = self.state.read().last_update.elapsed();
        let is_stale = elapsed > self.stale_timeout;
        self.is_stale.store(is_stale, Ordering::SeqCst);
        is_stale
    }

    /// The configured stale timeout.
    pub fn stale_timeout(&self) -> Duration {
        self.stale_timeout
    }

    // === Push updates ===

    /// Subscribe to snapshots broadcast after every successful apply.
    pub fn subscribe(&self) -> broadcast::Receiver<TelemetryState> {
        self.update_tx.subscribe()
    }

    /// Register a callback for telemetry updates.
    pub fn on_telemetry_updated<F>(&self, callback: F) -> CallbackHandle
    where
        F: Fn(&TelemetryState) + Send + Sync + 'static,
    {
        let callback_id = self.callback_counter.fetch_add(1, Ordering::SeqCst);
        let mut rx = self.update_tx.subscribe();

        let handle = tokio::spawn(async move {
            while let Ok(snapshot) = rx.recv().await {
                callback(&snapshot);
            }
        });

        CallbackHandle::new(callback_id, move || {
            handle.abort();
        })
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TelemetryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryStore")
            .field("telemetry", &self.snapshot())
            .field("stale_timeout", &self.stale_timeout)
            .finish()
    }
}
