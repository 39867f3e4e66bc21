//! # mecoffee-ble
//!
//! A Rust library for decoding telemetry from meCoffee espresso machine
//! PID controllers delivered over Bluetooth Low Energy.
//!
//! The meCoffee controller notifies short ASCII line-protocol frames on a
//! telemetry characteristic. This crate turns those raw byte buffers into
//! three typed readings and keeps the latest of each:
//!
//! - **Boiler temperature** in degrees Celsius (`tmp` frames)
//! - **Heater power** as a duty-cycle percentage (`pid` frames)
//! - **Last shot duration** in seconds (`sht` frames)
//!
//! BLE transport is deliberately out of scope: whatever delivers
//! notifications (btleplug, bluer, a platform service) hands each payload
//! to [`TelemetryStore::handle_frame`] and this crate does the rest.
//!
//! ## Quick Start
//!
//! ```
//! use mecoffee_ble::TelemetryStore;
//!
//! let store = TelemetryStore::new();
//!
//! // The transport delivers raw notification payloads:
//! store.handle_frame(b"tmp 1200 9300 9250 0 OK");
//! store.handle_frame(b"sht 5000 18500 OK");
//!
//! // Consumers poll non-blocking getters on their own cadence:
//! assert_eq!(store.temperature(), Some(92.5));
//! assert_eq!(store.shot_duration(), Some(18.5));
//! assert_eq!(store.power(), None); // never observed
//! ```
//!
//! Push-style consumers subscribe instead of polling:
//!
//! ```no_run
//! # async fn push(store: mecoffee_ble::TelemetryStore) {
//! let mut updates = store.subscribe();
//! while let Ok(snapshot) = updates.recv().await {
//!     if let Some(celsius) = snapshot.temperature {
//!         println!("boiler: {celsius:.2} °C");
//!     }
//! }
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Malformed frames (bad UTF-8, unknown tags, short frames, non-numeric
//! fields) are an expected part of the wire chatter. `handle_frame` logs
//! them via `tracing` and leaves the stored telemetry untouched; only the
//! lower-level [`protocol::decode`] exposes the [`Error`] taxonomy.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod ble;
pub mod data;
pub mod error;
pub mod protocol;
pub mod store;

// Re-exports for convenience
pub use data::{Metric, TelemetryState, TelemetryUpdate};
pub use error::{Error, Result};
pub use store::{CallbackHandle, TelemetryStore};

// Re-export commonly used constants from submodules
pub use ble::uuids::{MECOFFEE_CHAR_UUID, MECOFFEE_SERVICE_UUID};
