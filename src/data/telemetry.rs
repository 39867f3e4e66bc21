//! Telemetry data structures.
//!
//! Contains the typed telemetry values decoded from meCoffee frames and the
//! snapshot type holding the latest known value of each metric.

/// A single decoded telemetry value.
///
/// Exactly one variant is produced per successfully decoded frame; applying
/// it to a [`TelemetryState`] overwrites only the matching field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TelemetryUpdate {
    /// Current boiler temperature in degrees Celsius.
    Temperature(f64),
    /// Heater duty cycle as a percentage.
    ///
    /// The firmware reports a 16-bit-scaled raw value, so out-of-range
    /// firmware output can land outside 0-100. Values are passed through
    /// unclamped; clamping is a presentation concern.
    Power(f64),
    /// Duration of the last espresso shot in seconds.
    ShotDuration(f64),
}

impl TelemetryUpdate {
    /// The metric kind this update carries.
    pub fn metric(&self) -> Metric {
        match self {
            Self::Temperature(_) => Metric::Temperature,
            Self::Power(_) => Metric::Power,
            Self::ShotDuration(_) => Metric::ShotDuration,
        }
    }

    /// The carried value, independent of kind.
    pub fn value(&self) -> f64 {
        match self {
            Self::Temperature(v) | Self::Power(v) | Self::ShotDuration(v) => *v,
        }
    }
}

/// Latest known value for each of the three meCoffee metrics.
///
/// `None` means the metric has never been observed since startup (or since
/// the last explicit reset). Each field is updated independently: a malformed
/// frame never overwrites an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryState {
    /// Boiler temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Heater power in percent.
    pub power: Option<f64>,
    /// Last shot duration in seconds.
    pub shot_duration: Option<f64>,
}

impl TelemetryState {
    /// Create a state with no observed values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a decoded update, overwriting exactly the matching field.
    pub fn apply(&mut self, update: TelemetryUpdate) {
        match update {
            TelemetryUpdate::Temperature(celsius) => self.temperature = Some(celsius),
            TelemetryUpdate::Power(percent) => self.power = Some(percent),
            TelemetryUpdate::ShotDuration(seconds) => self.shot_duration = Some(seconds),
        }
    }

    /// Get a metric's value by kind.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Power => self.power,
            Metric::ShotDuration => self.shot_duration,
        }
    }

    /// True if no metric has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.power.is_none() && self.shot_duration.is_none()
    }
}

/// The kind of a telemetry metric.
///
/// Used by presentation layers to enumerate the available readings without
/// string-keyed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Boiler temperature.
    Temperature,
    /// Heater power.
    Power,
    /// Last shot duration.
    ShotDuration,
}

impl Metric {
    /// All metric kinds, in display order.
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Power, Metric::ShotDuration];

    /// Human-readable metric name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Power => "power",
            Self::ShotDuration => "shot duration",
        }
    }

    /// Unit symbol for display.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Power => "%",
            Self::ShotDuration => "s",
        }
    }
}
