//! meCoffee line protocol decoding.
//!
//! The controller notifies terse whitespace-separated ASCII lines over its
//! telemetry characteristic, e.g.:
//!
//! ```text
//! tmp <uptime> <setpoint> <current_temp_centideg> <aux> OK
//! pid <p_raw> <i> <d> <active> OK
//! sht <uptime> <duration_ms> OK
//! ```
//!
//! Only the documented field positions are read; trailing tokens (including
//! the `OK` status token) and unknown extra fields are ignored so that newer
//! firmware cannot break older decoders.

use tracing::trace;

use crate::data::TelemetryUpdate;
use crate::error::{Error, Result};

/// Tag of a temperature frame.
pub const TAG_TEMPERATURE: &str = "tmp";
/// Tag of a PID/heater-power frame.
pub const TAG_PID: &str = "pid";
/// Tag of a shot-duration frame.
pub const TAG_SHOT: &str = "sht";

/// Temperature fields are reported in centi-degrees Celsius.
const TEMPERATURE_SCALE: f64 = 0.01;

/// The PID duty field is 16-bit scaled: 65536 / 100 = 655.36 raw units per
/// percent. Out-of-range firmware values map outside 0-100 and are passed
/// through unclamped.
const POWER_DIVISOR: f64 = 655.36;

/// Shot durations are reported in milliseconds.
const MILLIS_PER_SECOND: f64 = 1000.0;

/// Decode one raw frame into a telemetry update.
///
/// The frame is decoded as UTF-8, trimmed, and split on whitespace; the
/// first token selects the message kind. Every failure mode (bad UTF-8,
/// unknown tag, too few tokens, non-numeric field) is a recoverable
/// [`Error`] — the caller is expected to log it and move on.
///
/// # Example
///
/// ```
/// use mecoffee_ble::protocol::decode;
/// use mecoffee_ble::TelemetryUpdate;
///
/// let update = decode(b"tmp 1200 9300 9250 0 OK").unwrap();
/// assert_eq!(update, TelemetryUpdate::Temperature(92.5));
/// ```
pub fn decode(frame: &[u8]) -> Result<TelemetryUpdate> {
    let text = std::str::from_utf8(frame)?;
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let tag = *tokens.first().ok_or(Error::EmptyFrame)?;
    trace!(tag, token_count = tokens.len(), "decoding frame");

    match tag {
        TAG_TEMPERATURE => {
            // tmp <uptime> <setpoint> <current_temp_centideg> <aux> OK
            let raw = required_field(TAG_TEMPERATURE, &tokens, 3, 4)?;
            Ok(TelemetryUpdate::Temperature(raw * TEMPERATURE_SCALE))
        }
        TAG_PID => {
            // pid <p_raw> <i> <d> <active> OK
            let raw = required_field(TAG_PID, &tokens, 1, 5)?;
            Ok(TelemetryUpdate::Power(raw / POWER_DIVISOR))
        }
        TAG_SHOT => {
            // sht <uptime> <duration_ms> OK
            let raw = required_field(TAG_SHOT, &tokens, 2, 3)?;
            Ok(TelemetryUpdate::ShotDuration(raw / MILLIS_PER_SECOND))
        }
        other => Err(Error::UnknownTag {
            tag: other.to_string(),
        }),
    }
}

/// Extract and parse the field at `index`, requiring at least `min_tokens`.
fn required_field(
    tag: &'static str,
    tokens: &[&str],
    index: usize,
    min_tokens: usize,
) -> Result<f64> {
    if tokens.len() < min_tokens {
        return Err(Error::ShortFrame {
            tag,
            expected: min_tokens,
            actual: tokens.len(),
        });
    }

    let token = tokens[index];
    token.parse::<f64>().map_err(|_| Error::NonNumericField {
        tag,
        index,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_temperature_frame() {
        let update = decode(b"tmp 1200 9300 9250 0 OK").unwrap();
        assert_eq!(update, TelemetryUpdate::Temperature(92.5));
    }

    #[test]
    fn test_decode_pid_frame() {
        let update = decode(b"pid 30000 1500 200 1 OK").unwrap();
        match update {
            TelemetryUpdate::Power(percent) => {
                assert!((percent - 30000.0 / 655.36).abs() < 1e-12);
            }
            other => panic!("expected Power, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_shot_frame() {
        let update = decode(b"sht 5000 18500 OK").unwrap();
        assert_eq!(update, TelemetryUpdate::ShotDuration(18.5));
    }

    #[test]
    fn test_pid_power_is_not_clamped() {
        // 16-bit max maps just above 100%; the decoder passes it through.
        let update = decode(b"pid 65535 0 0 1 OK").unwrap();
        match update {
            TelemetryUpdate::Power(percent) => assert!(percent > 99.99),
            other => panic!("expected Power, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!(matches!(
            decode(b"foo bar"),
            Err(Error::UnknownTag { tag }) if tag == "foo"
        ));
    }

    #[test]
    fn test_short_frame_is_rejected() {
        assert!(matches!(
            decode(b"tmp 1 2"),
            Err(Error::ShortFrame {
                tag: "tmp",
                expected: 4,
                actual: 3,
            })
        ));
        assert!(matches!(decode(b"pid 1 2 3"), Err(Error::ShortFrame { .. })));
        assert!(matches!(decode(b"sht 1"), Err(Error::ShortFrame { .. })));
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        assert!(matches!(decode(b""), Err(Error::EmptyFrame)));
        assert!(matches!(decode(b"   \t \r\n"), Err(Error::EmptyFrame)));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(matches!(decode(&[0xFF, 0xFE, 0x20]), Err(Error::Utf8(_))));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        assert!(matches!(
            decode(b"tmp 1200 9300 hot 0 OK"),
            Err(Error::NonNumericField {
                tag: "tmp",
                index: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        // Extra fields from future firmware must not break the decoder.
        let update = decode(b"sht 5000 18500 OK extra fields here").unwrap();
        assert_eq!(update, TelemetryUpdate::ShotDuration(18.5));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let update = decode(b"  tmp 1200 9300 9250 0 OK\r\n").unwrap();
        assert_eq!(update, TelemetryUpdate::Temperature(92.5));
    }

    #[test]
    fn test_missing_status_token_still_decodes() {
        // The trailing OK is informational; frames without it are accepted.
        let update = decode(b"tmp 1200 9300 9250 0").unwrap();
        assert_eq!(update, TelemetryUpdate::Temperature(92.5));
    }

    proptest! {
        #[test]
        fn prop_temperature_scaling(centideg in -20000i32..30000) {
            let frame = format!("tmp 1200 9300 {centideg} 0 OK");
            let update = decode(frame.as_bytes()).unwrap();
            prop_assert_eq!(
                update,
                TelemetryUpdate::Temperature(f64::from(centideg) * 0.01)
            );
        }

        #[test]
        fn prop_power_scaling(raw in 0u32..=65535) {
            let frame = format!("pid {raw} 1500 200 1 OK");
            let update = decode(frame.as_bytes()).unwrap();
            prop_assert_eq!(
                update,
                TelemetryUpdate::Power(f64::from(raw) / 655.36)
            );
        }

        #[test]
        fn prop_shot_scaling(millis in 0u32..600_000) {
            let frame = format!("sht 5000 {millis} OK");
            let update = decode(frame.as_bytes()).unwrap();
            prop_assert_eq!(
                update,
                TelemetryUpdate::ShotDuration(f64::from(millis) / 1000.0)
            );
        }

        #[test]
        fn prop_decode_never_panics(frame in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = decode(&frame);
        }
    }
}
