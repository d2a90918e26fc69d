// src/ports/telemetry.rs

//! Telemetry output port.

use crate::ports::Number;

/// One outbound telemetry snapshot.
///
/// Built fresh each tick from the current attitude estimate. The battery
/// voltage field is left at zero by the core; populating it is an external
/// collaborator's responsibility.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryFrame<T> {
    /// Estimated pitch angle.
    pub pitch: T,
    /// Estimated roll angle.
    pub roll: T,
    /// Estimated yaw angle.
    pub yaw: T,
    /// Battery voltage, zero unless an outer layer fills it in.
    pub batt_v: T,
}

/// Capability interface for the telemetry sink.
pub trait TelemetryOut<T: Number> {
    /// Consumes one frame, fire-and-forget. No acknowledgment, no failure
    /// channel.
    fn write(&mut self, frame: TelemetryFrame<T>);
}
