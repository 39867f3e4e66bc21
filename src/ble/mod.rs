//! BLE device contract.
//!
//! The transport layer (scanning, connecting, GATT subscription) lives
//! outside this crate; what belongs to the protocol is which service and
//! characteristic carry meCoffee telemetry. Those UUIDs are defined here.

pub mod uuids;

pub use uuids::*;
