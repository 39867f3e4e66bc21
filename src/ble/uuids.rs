//! BLE Service and Characteristic UUIDs.
//!
//! Contains the UUID constants used for meCoffee telemetry. The firmware
//! reuses the standard Battery Service pair for its line-protocol stream,
//! so these are 16-bit UUIDs in their full base-UUID form.

use uuid::Uuid;

/// meCoffee telemetry service UUID (standard Battery Service, 0x180F).
pub const MECOFFEE_SERVICE_UUID: Uuid = Uuid::from_u128(0x0000_180f_0000_1000_8000_00805f9b34fb);

/// meCoffee telemetry characteristic UUID (standard Battery Level, 0x2A19).
///
/// Notifications on this characteristic carry the whitespace-separated
/// line-protocol frames decoded by [`crate::protocol::decode`].
pub const MECOFFEE_CHAR_UUID: Uuid = Uuid::from_u128(0x0000_2a19_0000_1000_8000_00805f9b34fb);

/// Check if a service UUID is the meCoffee telemetry service.
pub fn is_mecoffee_service(uuid: &Uuid) -> bool {
    *uuid == MECOFFEE_SERVICE_UUID
}

/// Check if a characteristic UUID carries meCoffee telemetry.
pub fn is_telemetry_characteristic(uuid: &Uuid) -> bool {
    *uuid == MECOFFEE_CHAR_UUID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_format() {
        assert!(MECOFFEE_SERVICE_UUID.to_string().contains("180f"));
        assert!(MECOFFEE_CHAR_UUID.to_string().contains("2a19"));
    }

    #[test]
    fn test_is_mecoffee_service() {
        assert!(is_mecoffee_service(&MECOFFEE_SERVICE_UUID));
        assert!(!is_mecoffee_service(&MECOFFEE_CHAR_UUID));
    }

    #[test]
    fn test_is_telemetry_characteristic() {
        assert!(is_telemetry_characteristic(&MECOFFEE_CHAR_UUID));
        assert!(!is_telemetry_characteristic(&MECOFFEE_SERVICE_UUID));
    }
}
