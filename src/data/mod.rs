//! Data structures for machine telemetry.
//!
//! This module contains the core data types used to represent decoded
//! telemetry values and the latest-known-state snapshot.

pub mod telemetry;

pub use telemetry::{Metric, TelemetryState, TelemetryUpdate};
