//! Error types for the mecoffee-ble crate.
//!
//! Every decode failure is recoverable: the machine keeps sending frames, so
//! a bad one is logged and skipped rather than surfaced to the transport.

use thiserror::Error;

/// The main error type for this crate.
///
/// All variants describe a frame that could not be decoded. None of them is
/// fatal; the inbound path ([`TelemetryStore::handle_frame`]) logs them and
/// leaves the stored telemetry untouched.
///
/// [`TelemetryStore::handle_frame`]: crate::store::TelemetryStore::handle_frame
#[derive(Error, Debug)]
pub enum Error {
    /// The frame was not valid UTF-8 text.
    #[error("frame is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The frame contained no tokens after trimming whitespace.
    #[error("empty frame")]
    EmptyFrame,

    /// The frame's tag is not one the decoder understands.
    #[error("unknown message tag: {tag:?}")]
    UnknownTag {
        /// The tag token that was received.
        tag: String,
    },

    /// The frame had fewer tokens than its tag requires.
    #[error("short {tag} frame: got {actual} tokens, need at least {expected}")]
    ShortFrame {
        /// The recognized message tag.
        tag: &'static str,
        /// Minimum token count for this tag.
        expected: usize,
        /// Token count actually received.
        actual: usize,
    },

    /// A required field did not parse as a number.
    #[error("non-numeric field {index} in {tag} frame: {token:?}")]
    NonNumericField {
        /// The recognized message tag.
        tag: &'static str,
        /// Zero-based token index of the bad field.
        index: usize,
        /// The token that failed to parse.
        token: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
