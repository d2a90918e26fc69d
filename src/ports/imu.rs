// src/ports/imu.rs

//! Inertial measurement unit port.

use crate::ports::Number;

/// One raw inertial reading in sensor-native units.
///
/// Linear acceleration is expected to read the gravity direction when the
/// vehicle is near-static; angular rates are body-frame rates used for
/// attitude prediction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuSample<T> {
    /// Linear acceleration, x axis.
    pub ax: T,
    /// Linear acceleration, y axis.
    pub ay: T,
    /// Linear acceleration, z axis.
    pub az: T,
    /// Angular rate about the x axis.
    pub gx: T,
    /// Angular rate about the y axis.
    pub gy: T,
    /// Angular rate about the z axis.
    pub gz: T,
}

/// Capability interface for the inertial sensor.
///
/// `read` is a total function: there is no failure channel at this layer.
/// A real driver must map sensor faults to a sentinel sample or handle them
/// inside the adapter before the sample reaches the core.
pub trait Imu<T: Number> {
    /// Performs one-time sensor setup. Called once from
    /// [`FlightCore::init`](crate::FlightCore::init).
    fn begin(&mut self);

    /// Returns one fresh inertial sample. Synchronous, always succeeds.
    fn read(&mut self) -> ImuSample<T>;
}
