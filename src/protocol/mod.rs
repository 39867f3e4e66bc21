//! Protocol module for decoding meCoffee messages.
//!
//! This module contains the implementation for:
//! - Line-protocol frame decoding (`tmp` / `pid` / `sht` messages)

pub mod line;

pub use line::{decode, TAG_PID, TAG_SHOT, TAG_TEMPERATURE};
